//! Histogram of oriented gradients
//!
//! # Algorithm
//!
//! 1. Optionally replace every sample by its square root.
//! 2. Central-difference gradients; the outermost rows (for the vertical
//!    gradient) and columns (for the horizontal gradient) are 0.
//! 3. Unsigned orientation in [0, 180) degrees, hard-assigned to one of
//!    `orientations` equal bins; each cell histogram sums gradient
//!    magnitudes and is divided by the cell area.
//! 4. Overlapping blocks of cells, stepped one cell at a time, are
//!    L2-Hys normalized: L2 normalize, clip, L2 normalize again.
//!
//! The descriptor is laid out block row, block column, cell row, cell
//! column, orientation.

use crate::options::HogOptions;
use crate::{RecogError, RecogResult};
use digitscan_core::FPix;

const EPS: f32 = 1e-5;

/// Compute the HOG descriptor of a float image
///
/// Pixels beyond the last whole cell on each axis are ignored.
pub fn hog_descriptor(image: &FPix, options: &HogOptions) -> RecogResult<Vec<f32>> {
    options.validate()?;
    let (w, h) = image.dimensions();
    let ppc = options.pixels_per_cell;
    let cpb = options.cells_per_block as usize;
    let cells_x = (w / ppc) as usize;
    let cells_y = (h / ppc) as usize;
    if cells_x < cpb || cells_y < cpb {
        return Err(RecogError::InvalidParameter(format!(
            "{w}x{h} image is smaller than one {cpb}x{cpb} block of {ppc}px cells"
        )));
    }

    let (magnitude, orientation) = gradients(image, options.transform_sqrt);

    // cell histograms
    let nbins = options.orientations;
    let bin_width = 180.0 / nbins as f32;
    let cell_area = (ppc * ppc) as f32;
    let mut cells = vec![0.0f32; cells_y * cells_x * nbins];
    for cy in 0..cells_y {
        for cx in 0..cells_x {
            let hist = &mut cells[(cy * cells_x + cx) * nbins..][..nbins];
            for y in cy as u32 * ppc..(cy as u32 + 1) * ppc {
                for x in cx as u32 * ppc..(cx as u32 + 1) * ppc {
                    let i = (y * w + x) as usize;
                    let bin = ((orientation[i] / bin_width) as usize).min(nbins - 1);
                    hist[bin] += magnitude[i];
                }
            }
            for v in hist.iter_mut() {
                *v /= cell_area;
            }
        }
    }

    // block normalization
    let blocks_x = cells_x - cpb + 1;
    let blocks_y = cells_y - cpb + 1;
    let mut descriptor = Vec::with_capacity(blocks_y * blocks_x * cpb * cpb * nbins);
    let mut block = Vec::with_capacity(cpb * cpb * nbins);
    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            block.clear();
            for cy in by..by + cpb {
                for cx in bx..bx + cpb {
                    block.extend_from_slice(&cells[(cy * cells_x + cx) * nbins..][..nbins]);
                }
            }
            l2_hys(&mut block, options.clip);
            descriptor.extend_from_slice(&block);
        }
    }
    Ok(descriptor)
}

/// Gradient magnitude and unsigned orientation in degrees, row-major
fn gradients(image: &FPix, transform_sqrt: bool) -> (Vec<f32>, Vec<f32>) {
    let (w, h) = image.dimensions();
    let sample = |x: u32, y: u32| {
        let v = image.get_pixel_unchecked(x, y);
        if transform_sqrt { v.max(0.0).sqrt() } else { v }
    };

    let n = (w * h) as usize;
    let mut magnitude = vec![0.0f32; n];
    let mut orientation = vec![0.0f32; n];
    for y in 0..h {
        for x in 0..w {
            let g_row = if y > 0 && y + 1 < h {
                sample(x, y + 1) - sample(x, y - 1)
            } else {
                0.0
            };
            let g_col = if x > 0 && x + 1 < w {
                sample(x + 1, y) - sample(x - 1, y)
            } else {
                0.0
            };
            let i = (y * w + x) as usize;
            magnitude[i] = g_row.hypot(g_col);
            orientation[i] = g_row.atan2(g_col).to_degrees().rem_euclid(180.0);
        }
    }
    (magnitude, orientation)
}

fn l2_hys(block: &mut [f32], clip: f32) {
    let norm = (block.iter().map(|v| v * v).sum::<f32>() + EPS * EPS).sqrt();
    for v in block.iter_mut() {
        *v = (*v / norm).min(clip);
    }
    let norm = (block.iter().map(|v| v * v).sum::<f32>() + EPS * EPS).sqrt();
    for v in block.iter_mut() {
        *v /= norm;
    }
}
