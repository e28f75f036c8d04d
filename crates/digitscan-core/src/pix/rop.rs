//! Raster operations
//!
//! Inversion and pasting one image into another at an offset.

use super::{Pix, PixMut, PixelDepth};
use crate::error::{Error, Result};

impl Pix {
    /// Invert an 8 bpp image (`255 - v`).
    ///
    /// For 32 bpp images the RGB channels are inverted and alpha preserved.
    pub fn invert(&self) -> Pix {
        let mut result = self.to_mut();
        result.invert_inplace();
        result.into()
    }
}

impl PixMut {
    /// Invert all pixels in place.
    pub fn invert_inplace(&mut self) {
        match self.depth() {
            PixelDepth::Bit8 => {
                for word in self.data_mut() {
                    *word = !*word;
                }
            }
            PixelDepth::Bit32 => {
                for word in self.data_mut() {
                    *word ^= 0xffff_ff00;
                }
            }
        }
    }

    /// Copy `src` into this image with its top-left corner at `(dx, dy)`.
    ///
    /// Source pixels landing outside the destination are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the depths differ.
    pub fn paste(&mut self, src: &Pix, dx: i32, dy: i32) -> Result<()> {
        if src.depth() != self.depth() {
            return Err(Error::UnsupportedDepth(src.depth().bits()));
        }
        let dw = self.width() as i64;
        let dh = self.height() as i64;
        for sy in 0..src.height() {
            let ty = dy as i64 + sy as i64;
            if ty < 0 || ty >= dh {
                continue;
            }
            for sx in 0..src.width() {
                let tx = dx as i64 + sx as i64;
                if tx < 0 || tx >= dw {
                    continue;
                }
                let v = src.get_pixel_unchecked(sx, sy);
                self.set_pixel_unchecked(tx as u32, ty as u32, v);
            }
        }
        Ok(())
    }
}
