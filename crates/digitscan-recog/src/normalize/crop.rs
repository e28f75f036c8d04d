//! Blob filtering and cropping to the ink bounding box

use crate::{RecogError, RecogResult};
use digitscan_core::{Box, Pix};
use digitscan_region::{ConnectivityType, filter_components_by_size};
use tracing::debug;

/// What to do when a tile has no ink left to crop to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropPolicy {
    /// Fail with [`RecogError::NoInkFound`]
    RequireInk,
    /// Keep the full frame
    FullFrameFallback,
}

/// Drop 8-connected components smaller than `min_area` pixels
pub fn remove_small_blobs(pix: &Pix, min_area: u32) -> RecogResult<Pix> {
    Ok(filter_components_by_size(
        pix,
        min_area,
        ConnectivityType::EightWay,
    )?)
}

/// Crop a binary tile to the tight bounding box of its ink
///
/// Returns the crop and the box it was taken from, in tile coordinates.
pub fn crop_to_ink(pix: &Pix, policy: CropPolicy) -> RecogResult<(Pix, Box)> {
    match pix.clip_to_foreground()? {
        Some((cropped, bounds)) => Ok((cropped, bounds)),
        None => match policy {
            CropPolicy::RequireInk => Err(RecogError::NoInkFound),
            CropPolicy::FullFrameFallback => {
                debug!(
                    width = pix.width(),
                    height = pix.height(),
                    "no ink to crop, keeping the full frame"
                );
                let frame = Box::new(0, 0, pix.width() as i32, pix.height() as i32)?;
                Ok((pix.clone(), frame))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitscan_core::PixelDepth;

    #[test]
    fn test_crop_to_ink() {
        let mut pm = Pix::new(10, 8, PixelDepth::Bit8).unwrap().to_mut();
        pm.set_pixel(2, 3, 255).unwrap();
        pm.set_pixel(6, 5, 255).unwrap();
        let (crop, b) = crop_to_ink(&pm.into(), CropPolicy::RequireInk).unwrap();
        assert_eq!(b, Box::new_unchecked(2, 3, 5, 3));
        assert_eq!((crop.width(), crop.height()), (5, 3));
        assert_eq!(crop.get_pixel(0, 0), Some(255));
        assert_eq!(crop.get_pixel(4, 2), Some(255));
    }

    #[test]
    fn test_empty_policies() {
        let pix = Pix::new(12, 9, PixelDepth::Bit8).unwrap();
        assert!(matches!(
            crop_to_ink(&pix, CropPolicy::RequireInk),
            Err(RecogError::NoInkFound)
        ));
        let (crop, b) = crop_to_ink(&pix, CropPolicy::FullFrameFallback).unwrap();
        assert_eq!(b, Box::new_unchecked(0, 0, 12, 9));
        assert_eq!((crop.width(), crop.height()), (12, 9));
    }

    #[test]
    fn test_remove_small_blobs_keeps_threshold_area() {
        let mut pm = Pix::new(10, 10, PixelDepth::Bit8).unwrap().to_mut();
        for x in 0..5 {
            pm.set_pixel(x, 0, 255).unwrap();
        }
        for x in 0..4 {
            pm.set_pixel(x, 9, 255).unwrap();
        }
        let out = remove_small_blobs(&pm.into(), 5).unwrap();
        assert_eq!(out.count_nonzero(), 5);
        assert_eq!(out.get_pixel(0, 9), Some(0));
    }
}
