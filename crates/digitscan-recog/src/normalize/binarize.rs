//! Grayscale conversion and fixed-threshold binarization
//!
//! Both policies produce an 8 bpp tile with ink at 255 and background at 0.

use crate::RecogResult;
use crate::options::NormalizeOptions;
use digitscan_color::{Polarity, normalize_polarity, pix_convert_to_gray, threshold_to_binary};
use digitscan_core::Pix;
use digitscan_filter::{bilateral, sharpen};
use tracing::debug;

/// Canvas policy: dark strokes below the threshold become ink
pub fn binarize_canvas(pix: &Pix, options: &NormalizeOptions) -> RecogResult<Pix> {
    let gray = pix_convert_to_gray(pix)?;
    Ok(threshold_to_binary(
        &gray,
        options.canvas_threshold,
        Polarity::InkBelow,
    )?)
}

/// Natural policy for photographed digits
///
/// Smooths with a bilateral filter, converts to gray, inverts bright
/// captures so that ink is bright, optionally sharpens, then keeps levels
/// above the threshold.
pub fn binarize_natural(pix: &Pix, enhance: bool, options: &NormalizeOptions) -> RecogResult<Pix> {
    let smoothed = bilateral(
        pix,
        options.bilateral_diameter,
        options.bilateral_range_sigma,
        options.bilateral_spatial_sigma,
    )?;
    let gray = pix_convert_to_gray(&smoothed)?;
    let (gray, inverted) = normalize_polarity(&gray, options.invert_brightness)?;
    debug!(inverted, "polarity normalized");

    let gray = if enhance { sharpen(&gray)? } else { gray };
    Ok(threshold_to_binary(
        &gray,
        options.natural_threshold,
        Polarity::InkAbove,
    )?)
}
