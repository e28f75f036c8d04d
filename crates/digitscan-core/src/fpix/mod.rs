//! FPix - Floating-point image
//!
//! `FPix` is a 2D array of `f32` values. The digit pipeline uses it for the
//! corner mask and for the normalized `[0, 1]` tile handed to scorers.
//!
//! # Examples
//!
//! ```
//! use digitscan_core::FPix;
//!
//! let mut fpix = FPix::new(28, 28).unwrap();
//! fpix.set_pixel(10, 20, 0.5).unwrap();
//! assert_eq!(fpix.get_pixel(10, 20).unwrap(), 0.5);
//! ```

use crate::error::{Error, Result};
use crate::pix::{Pix, PixelDepth};

/// Floating-point image
#[derive(Debug, Clone, PartialEq)]
pub struct FPix {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl FPix {
    /// Create a new zero-filled `FPix`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create a new `FPix` with every pixel set to `value`.
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(FPix {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create an `FPix` from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if a dimension is 0 and
    /// [`Error::InvalidParameter`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(FPix {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<f32> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }
        Ok(self.get_pixel_unchecked(x, y))
    }

    /// Set a pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> f32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: f32) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
    }

    /// Row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Get the values of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[f32] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Convert an 8 bpp `Pix` into an `FPix`, multiplying each sample by
    /// `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for anything but 8 bpp.
    pub fn from_pix_scaled(pix: &Pix, scale: f32) -> Result<Self> {
        if pix.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(pix.depth().bits()));
        }
        let mut fpix = FPix::new(pix.width(), pix.height())?;
        for y in 0..pix.height() {
            for x in 0..pix.width() {
                let v = pix.get_pixel_unchecked(x, y) as f32;
                fpix.set_pixel_unchecked(x, y, v * scale);
            }
        }
        Ok(fpix)
    }

    /// Convert to an 8 bpp `Pix` after multiplying each value by `scale`.
    ///
    /// Values are rounded and clamped to `[0, 255]`.
    pub fn to_pix_scaled(&self, scale: f32) -> Result<Pix> {
        let mut pm = Pix::new(self.width, self.height, PixelDepth::Bit8)?.to_mut();
        for y in 0..self.height {
            for x in 0..self.width {
                let v = (self.get_pixel_unchecked(x, y) * scale).round();
                pm.set_pixel_unchecked(x, y, v.clamp(0.0, 255.0) as u32);
            }
        }
        Ok(pm.into())
    }

    /// Multiply every value by a constant.
    pub fn mul_constant(&mut self, value: f32) {
        for v in &mut self.data {
            *v *= value;
        }
    }

    /// Sum of all values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
