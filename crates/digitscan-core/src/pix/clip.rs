//! Clipping and foreground bounds
//!
//! Rectangle extraction and the tight bounding box of non-zero pixels.

use super::{Pix, PixelDepth};
use crate::box_::Box;
use crate::error::{Error, Result};

impl Pix {
    /// Extract the rectangle `b`, clipped to the image bounds.
    ///
    /// The result keeps the depth and spp of the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyClip`] if the clipped rectangle is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitscan_core::{Box, Pix, PixelDepth};
    ///
    /// let pix = Pix::new(100, 80, PixelDepth::Bit8).unwrap();
    /// let clipped = pix.clip_rectangle(&Box::new_unchecked(80, 60, 50, 50)).unwrap();
    /// assert_eq!(clipped.width(), 20);
    /// assert_eq!(clipped.height(), 20);
    /// ```
    pub fn clip_rectangle(&self, b: &Box) -> Result<Pix> {
        let x0 = b.x.max(0);
        let y0 = b.y.max(0);
        let x1 = b.right().min(self.width() as i32);
        let y1 = b.bottom().min(self.height() as i32);
        if x1 <= x0 || y1 <= y0 {
            return Err(Error::EmptyClip {
                x: b.x,
                y: b.y,
                w: b.w,
                h: b.h,
            });
        }

        let (x0, y0) = (x0 as u32, y0 as u32);
        let clip_w = x1 as u32 - x0;
        let clip_h = y1 as u32 - y0;

        let mut pixd = Pix::new(clip_w, clip_h, self.depth())?.to_mut();
        if self.depth() == PixelDepth::Bit32 {
            pixd.set_spp(self.spp());
        }

        for dy in 0..clip_h {
            for dx in 0..clip_w {
                let val = self.get_pixel_unchecked(x0 + dx, y0 + dy);
                pixd.set_pixel_unchecked(dx, dy, val);
            }
        }

        Ok(pixd.into())
    }

    /// Tight bounding box of all non-zero pixels.
    ///
    /// Returns `None` when every pixel is zero.
    pub fn foreground_bounds(&self) -> Option<Box> {
        let w = self.width();
        let h = self.height();

        let row_has_fg = |y: u32| (0..w).any(|x| self.get_pixel_unchecked(x, y) != 0);

        let miny = (0..h).find(|&y| row_has_fg(y))?;
        let maxy = (miny..h).rev().find(|&y| row_has_fg(y)).unwrap_or(miny);

        let mut minx = w;
        let mut maxx = 0;
        for y in miny..=maxy {
            for x in 0..w {
                if self.get_pixel_unchecked(x, y) != 0 {
                    minx = minx.min(x);
                    maxx = maxx.max(x);
                }
            }
        }

        Some(Box::from_inclusive(
            minx as i32,
            miny as i32,
            maxx as i32,
            maxy as i32,
        ))
    }

    /// Crop to the foreground bounding box.
    ///
    /// Returns `Ok(None)` when the image has no non-zero pixels.
    pub fn clip_to_foreground(&self) -> Result<Option<(Pix, Box)>> {
        match self.foreground_bounds() {
            Some(b) => Ok(Some((self.clip_rectangle(&b)?, b))),
            None => Ok(None),
        }
    }
}
