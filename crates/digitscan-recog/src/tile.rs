//! The fixed-size scorer input

use crate::options::TILE_SIZE;
use crate::{RecogError, RecogResult};
use digitscan_core::{FPix, Pix, PixelDepth};

/// A 28x28 single-channel tile with values in [0, 1] and the ink centered
///
/// This is the only representation passed to a scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTile {
    fpix: FPix,
}

impl NormalizedTile {
    /// Build a tile from an 8 bpp 28x28 image, dividing each sample by 255
    pub fn from_pix(pix: &Pix) -> RecogResult<Self> {
        if pix.depth() != PixelDepth::Bit8 {
            return Err(RecogError::InvalidParameter(format!(
                "tile source must be 8 bpp, got {}",
                pix.depth().bits()
            )));
        }
        check_dims(pix.width(), pix.height())?;
        let data: Vec<f32> = pix
            .to_gray_bytes()?
            .into_iter()
            .map(|v| v as f32 / 255.0)
            .collect();
        Ok(Self {
            fpix: FPix::from_data(TILE_SIZE, TILE_SIZE, data)?,
        })
    }

    /// Wrap row-major values, which must be 784 numbers in [0, 1]
    pub fn from_values(values: Vec<f32>) -> RecogResult<Self> {
        if let Some(v) = values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(RecogError::InvalidParameter(format!(
                "tile value {v} outside [0, 1]"
            )));
        }
        Ok(Self {
            fpix: FPix::from_data(TILE_SIZE, TILE_SIZE, values)?,
        })
    }

    /// Row-major values, the `[1, 28, 28, 1]` model input flattened
    pub fn values(&self) -> &[f32] {
        self.fpix.data()
    }

    /// Underlying float image
    pub fn as_fpix(&self) -> &FPix {
        &self.fpix
    }

    /// Value at (x, y)
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        self.fpix.get_pixel(x, y).ok()
    }

    /// Number of non-zero values
    pub fn ink_count(&self) -> usize {
        self.values().iter().filter(|&&v| v > 0.0).count()
    }

    /// 8 bpp rendering of the tile (values times 255)
    pub fn to_pix(&self) -> RecogResult<Pix> {
        Ok(self.fpix.to_pix_scaled(255.0)?)
    }
}

fn check_dims(width: u32, height: u32) -> RecogResult<()> {
    if width != TILE_SIZE || height != TILE_SIZE {
        return Err(RecogError::InvalidParameter(format!(
            "tile must be {TILE_SIZE}x{TILE_SIZE}, got {width}x{height}"
        )));
    }
    Ok(())
}
