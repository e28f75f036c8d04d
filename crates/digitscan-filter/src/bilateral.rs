//! Bilateral filtering (edge-preserving smoothing)
//!
//! Each output pixel is a weighted average over a disk of the given
//! diameter. The weight of a neighbor is the product of
//!
//! - a spatial Gaussian of its distance to the center, and
//! - a range Gaussian of its intensity difference to the center.
//!
//! For 32 bpp images the intensity difference is the sum of the absolute
//! R, G and B differences, and one weight is shared by the three channels,
//! so color edges are preserved as a whole.
//!
//! # Example
//!
//! ```ignore
//! use digitscan_filter::bilateral;
//!
//! let smoothed = bilateral(&pix, 9, 75.0, 75.0)?;
//! ```

use crate::convolve::reflect101;
use crate::{FilterError, FilterResult};
use digitscan_core::{Pix, PixelDepth, color};

/// Create a range kernel for bilateral filtering
///
/// Element `i` is the weight for an intensity difference of `i`; `len` is
/// 256 for grayscale and 766 for summed RGB differences.
pub fn make_range_kernel(range_stdev: f32, len: usize) -> FilterResult<Vec<f32>> {
    if range_stdev <= 0.0 {
        return Err(FilterError::InvalidParameters(
            "range_stdev must be positive".to_string(),
        ));
    }

    let denom = 2.0 * range_stdev * range_stdev;
    Ok((0..len)
        .map(|i| (-(i as f32 * i as f32) / denom).exp())
        .collect())
}

/// Disk of neighbor offsets with their spatial weights.
fn make_spatial_taps(diameter: u32, spatial_stdev: f32) -> Vec<(i32, i32, f32)> {
    let radius = (diameter / 2) as i32;
    let denom = 2.0 * spatial_stdev * spatial_stdev;
    let mut taps = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let r2 = (dx * dx + dy * dy) as f32;
            if r2.sqrt() > radius as f32 {
                continue;
            }
            taps.push((dx, dy, (-r2 / denom).exp()));
        }
    }
    taps
}

/// Apply a bilateral filter to an 8 bpp or 32 bpp image.
///
/// # Arguments
/// * `diameter` - Neighborhood diameter in pixels (at least 1)
/// * `range_stdev` - Standard deviation of the range Gaussian
/// * `spatial_stdev` - Standard deviation of the spatial Gaussian
pub fn bilateral(
    pix: &Pix,
    diameter: u32,
    range_stdev: f32,
    spatial_stdev: f32,
) -> FilterResult<Pix> {
    if diameter == 0 {
        return Err(FilterError::InvalidParameters(
            "diameter must be positive".to_string(),
        ));
    }
    if spatial_stdev <= 0.0 {
        return Err(FilterError::InvalidParameters(
            "spatial_stdev must be positive".to_string(),
        ));
    }

    let taps = make_spatial_taps(diameter, spatial_stdev);
    match pix.depth() {
        PixelDepth::Bit8 => {
            let range = make_range_kernel(range_stdev, 256)?;
            bilateral_gray(pix, &taps, &range)
        }
        PixelDepth::Bit32 => {
            let range = make_range_kernel(range_stdev, 3 * 255 + 1)?;
            bilateral_color(pix, &taps, &range)
        }
    }
}

fn bilateral_gray(pix: &Pix, taps: &[(i32, i32, f32)], range: &[f32]) -> FilterResult<Pix> {
    let w = pix.width();
    let h = pix.height();
    let mut out_mut = Pix::new(w, h, PixelDepth::Bit8)?.to_mut();

    for y in 0..h {
        for x in 0..w {
            let center_val = pix.get_pixel_unchecked(x, y) as i32;

            let mut sum = 0.0f32;
            let mut weight_sum = 0.0f32;

            for &(dx, dy, spatial_weight) in taps {
                let sx = reflect101(x as i32 + dx, w);
                let sy = reflect101(y as i32 + dy, h);
                let neighbor_val = pix.get_pixel_unchecked(sx, sy) as i32;
                let diff = (center_val - neighbor_val).unsigned_abs() as usize;

                let weight = spatial_weight * range[diff];
                sum += neighbor_val as f32 * weight;
                weight_sum += weight;
            }

            let result = (sum / weight_sum).round() as u32;
            out_mut.set_pixel_unchecked(x, y, result.min(255));
        }
    }

    Ok(out_mut.into())
}

fn bilateral_color(pix: &Pix, taps: &[(i32, i32, f32)], range: &[f32]) -> FilterResult<Pix> {
    let w = pix.width();
    let h = pix.height();
    let mut out_mut = Pix::new(w, h, PixelDepth::Bit32)?.to_mut();
    out_mut.set_spp(pix.spp());

    for y in 0..h {
        for x in 0..w {
            let (cr, cg, cb, ca) = color::extract_rgba(pix.get_pixel_unchecked(x, y));

            let mut sum = [0.0f32; 3];
            let mut weight_sum = 0.0f32;

            for &(dx, dy, spatial_weight) in taps {
                let sx = reflect101(x as i32 + dx, w);
                let sy = reflect101(y as i32 + dy, h);
                let (nr, ng, nb) = color::extract_rgb(pix.get_pixel_unchecked(sx, sy));

                let diff = (cr as i32 - nr as i32).unsigned_abs()
                    + (cg as i32 - ng as i32).unsigned_abs()
                    + (cb as i32 - nb as i32).unsigned_abs();

                let weight = spatial_weight * range[diff as usize];
                sum[0] += nr as f32 * weight;
                sum[1] += ng as f32 * weight;
                sum[2] += nb as f32 * weight;
                weight_sum += weight;
            }

            let channel = |s: f32| (s / weight_sum).round().clamp(0.0, 255.0) as u8;
            let px = color::compose_rgba(channel(sum[0]), channel(sum[1]), channel(sum[2]), ca);
            out_mut.set_pixel_unchecked(x, y, px);
        }
    }

    Ok(out_mut.into())
}
