//! Pixel depth conversion functions
//!
//! Conversions between 32 bpp RGB and 8 bpp grayscale.

use super::{Pix, PixelDepth};
use crate::color;
use crate::error::Result;

impl Pix {
    /// Convert 32 bpp RGB to 8 bpp grayscale by the truncated channel mean.
    ///
    /// `gray = (r + g + b) / 3` with integer division. An 8 bpp input is
    /// returned unchanged (shared).
    pub fn convert_rgb_to_gray_mean(&self) -> Result<Pix> {
        match self.depth() {
            PixelDepth::Bit8 => Ok(self.clone()),
            PixelDepth::Bit32 => {
                let w = self.width();
                let h = self.height();
                let mut result = Pix::new(w, h, PixelDepth::Bit8)?.to_mut();
                for y in 0..h {
                    for x in 0..w {
                        let (r, g, b) = color::extract_rgb(self.get_pixel_unchecked(x, y));
                        let gray = (r as u32 + g as u32 + b as u32) / 3;
                        result.set_pixel_unchecked(x, y, gray);
                    }
                }
                Ok(result.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_mean_truncates() {
        let pix = Pix::from_rgb_bytes(2, 1, &[10, 11, 11, 255, 255, 254]).unwrap();
        let gray = pix.convert_rgb_to_gray_mean().unwrap();
        assert_eq!(gray.depth(), PixelDepth::Bit8);
        // 32 / 3 = 10, 764 / 3 = 254
        assert_eq!(gray.to_gray_bytes().unwrap(), vec![10, 254]);
    }

    #[test]
    fn test_gray_mean_passes_8bpp_through() {
        let pix = Pix::from_gray_bytes(2, 1, &[3, 200]).unwrap();
        let gray = pix.convert_rgb_to_gray_mean().unwrap();
        assert_eq!(gray.to_gray_bytes().unwrap(), vec![3, 200]);
    }
}
