//! Rounded-corner removal for canvas captures

use crate::RecogResult;
use digitscan_core::{FPix, Pix};

/// Build the corner mask for a `width` x `height` image
///
/// For each corner, pixels inside the quarter disk of radius `radius`
/// centered `radius` pixels in from both edges, on the side facing the
/// corner, are 0. Everything else is 1. A radius of 0 masks nothing.
pub fn corner_mask(width: u32, height: u32, radius: u32) -> RecogResult<FPix> {
    let mut mask = FPix::new_with_value(width, height, 1.0)?;
    if radius == 0 {
        return Ok(mask);
    }

    let r = radius as i64;
    let w = width as i64;
    let h = height as i64;
    // (center x, center y, x sign, y sign); sign points toward the corner
    let corners = [(r, r, -1, -1), (w - r, r, 1, -1), (r, h - r, -1, 1), (w - r, h - r, 1, 1)];

    for (cx, cy, sx, sy) in corners {
        let x_lo = (cx - r).max(0);
        let x_hi = (cx + r).min(w - 1);
        let y_lo = (cy - r).max(0);
        let y_hi = (cy + r).min(h - 1);
        for y in y_lo..=y_hi {
            let dy = y - cy;
            if dy * sy < 0 {
                continue;
            }
            for x in x_lo..=x_hi {
                let dx = x - cx;
                if dx * sx < 0 || dx * dx + dy * dy > r * r {
                    continue;
                }
                mask.set_pixel_unchecked(x as u32, y as u32, 0.0);
            }
        }
    }
    Ok(mask)
}

/// Multiply an image by its corner mask
pub fn apply_corner_mask(pix: &Pix, radius: u32) -> RecogResult<Pix> {
    let mask = corner_mask(pix.width(), pix.height(), radius)?;
    Ok(pix.multiply_by_mask(&mask)?)
}
