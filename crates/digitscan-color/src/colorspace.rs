//! Grayscale conversion

use crate::ColorResult;
use digitscan_core::Pix;

/// Gray level of an RGB triple: the truncated mean of the three channels.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 + g as u32 + b as u32) / 3) as u8
}

/// Convert an image to 8 bpp grayscale with [`rgb_to_gray`].
///
/// 8 bpp input is returned as is.
pub fn pix_convert_to_gray(pix: &Pix) -> ColorResult<Pix> {
    Ok(pix.convert_rgb_to_gray_mean()?)
}
