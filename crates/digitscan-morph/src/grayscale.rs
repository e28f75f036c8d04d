//! Grayscale morphological operations
//!
//! Dilation for 8-bpp grayscale images with an arbitrary structuring
//! element. Each destination pixel is the maximum of the source pixels at
//! the SEL's hit offsets; offsets falling outside the image are skipped.

use crate::{MorphError, MorphResult, Sel};
use digitscan_core::{Pix, PixelDepth};

fn check_grayscale(pix: &Pix) -> MorphResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(MorphError::UnsupportedDepth {
            expected: "8-bpp",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Dilate a grayscale image with a structuring element
///
/// Dilation computes the maximum pixel value in the SE neighborhood,
/// which expands bright regions and shrinks dark regions.
pub fn dilate_gray(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    check_grayscale(pix)?;
    let offsets: Vec<(i32, i32)> = sel.hit_offsets().collect();

    let w = pix.width() as i32;
    let h = pix.height() as i32;
    let mut out = pix.create_template().to_mut();

    for y in 0..h {
        for x in 0..w {
            let mut max = 0u32;
            for &(dx, dy) in &offsets {
                let sx = x + dx;
                let sy = y + dy;
                if sx < 0 || sy < 0 || sx >= w || sy >= h {
                    continue;
                }
                max = max.max(pix.get_pixel_unchecked(sx as u32, sy as u32));
            }
            out.set_pixel_unchecked(x as u32, y as u32, max);
        }
    }

    Ok(out.into())
}

/// Dilate a grayscale image with a `hsize` x `vsize` brick
pub fn dilate_gray_brick(pix: &Pix, hsize: u32, vsize: u32) -> MorphResult<Pix> {
    let sel = Sel::create_brick(hsize, vsize)?;
    dilate_gray(pix, &sel)
}
