//! Image arithmetic operations
//!
//! Pixel-wise multiplication by a floating-point mask.

use super::{Pix, PixelDepth};
use crate::color;
use crate::error::{Error, Result};
use crate::fpix::FPix;

impl Pix {
    /// Multiply every sample by the mask value at the same position.
    ///
    /// For 32 bpp images each RGB channel is multiplied and alpha is kept.
    /// Products are truncated toward zero and clamped to `[0, 255]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the mask size differs.
    pub fn multiply_by_mask(&self, mask: &FPix) -> Result<Pix> {
        if mask.dimensions() != (self.width(), self.height()) {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: mask.dimensions(),
            });
        }

        let scale = |v: u8, m: f32| -> u8 { (v as f32 * m).clamp(0.0, 255.0) as u8 };

        let mut result = self.to_mut();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let m = mask.get_pixel_unchecked(x, y);
                if m == 1.0 {
                    continue;
                }
                let val = self.get_pixel_unchecked(x, y);
                let out = match self.depth() {
                    PixelDepth::Bit8 => scale(val as u8, m) as u32,
                    PixelDepth::Bit32 => {
                        let (r, g, b, a) = color::extract_rgba(val);
                        color::compose_rgba(scale(r, m), scale(g, m), scale(b, m), a)
                    }
                };
                result.set_pixel_unchecked(x, y, out);
            }
        }
        Ok(result.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_by_mask_gray() {
        let pix = Pix::from_gray_bytes(3, 1, &[200, 200, 201]).unwrap();
        let mask = FPix::from_data(3, 1, vec![0.0, 1.0, 0.5]).unwrap();
        let out = pix.multiply_by_mask(&mask).unwrap();
        assert_eq!(out.to_gray_bytes().unwrap(), vec![0, 200, 100]);
    }

    #[test]
    fn test_multiply_by_mask_rgb() {
        let pix = Pix::from_rgb_bytes(2, 1, &[255, 255, 255, 9, 8, 7]).unwrap();
        let mask = FPix::from_data(2, 1, vec![0.0, 1.0]).unwrap();
        let out = pix.multiply_by_mask(&mask).unwrap();
        assert_eq!(out.get_rgb(0, 0), Some((0, 0, 0)));
        assert_eq!(out.get_rgb(1, 0), Some((9, 8, 7)));
    }

    #[test]
    fn test_multiply_by_mask_size_mismatch() {
        let pix = Pix::new(3, 3, PixelDepth::Bit8).unwrap();
        let mask = FPix::new(2, 3).unwrap();
        assert!(pix.multiply_by_mask(&mask).is_err());
    }
}
