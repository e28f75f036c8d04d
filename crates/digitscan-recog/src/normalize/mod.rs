//! Image normalization
//!
//! Converts an arbitrary capture into a [`NormalizedTile`]: a 28x28 tile
//! with bright, centered ink on a zero background.
//!
//! # Pipeline
//!
//! Canvas captures:
//! 1. Mask the rounded-corner quarter disks
//! 2. Gray by channel mean, ink below 200
//! 3. Drop components under 5 pixels
//! 4. Crop to the ink, or keep the full frame when none is left
//! 5. Resample to 20x20 with nearest-neighbor sampling
//! 6. Center on the tile
//!
//! Natural captures:
//! 1. Bilateral smoothing, gray, invert bright captures, optional sharpen,
//!    ink above 127
//! 2. Drop components under 30 pixels
//! 3. Crop to the ink; no ink is an error
//! 4. Scale to a height in [21, 24] with area averaging, thickening sparse
//!    strokes
//! 5. Center on the tile, clipping overflow

mod aspect;
mod binarize;
mod center;
mod crop;
mod mask;

pub use aspect::{AspectPlan, normalize_aspect};
pub use binarize::{binarize_canvas, binarize_natural};
pub use center::{center_offset, center_on_tile};
pub use crop::{CropPolicy, crop_to_ink, remove_small_blobs};
pub use mask::{apply_corner_mask, corner_mask};

use crate::RecogResult;
use crate::options::{ImageSource, NormalizeOptions};
use crate::tile::NormalizedTile;
use digitscan_core::Pix;
use digitscan_transform::scale_by_sampling_to_size;

/// Normalize an image with default options
///
/// `enhance` turns on sharpening for natural captures and is ignored for
/// canvas captures.
pub fn normalize(image: &Pix, source: ImageSource, enhance: bool) -> RecogResult<NormalizedTile> {
    normalize_with(image, source, enhance, &NormalizeOptions::default())
}

/// Normalize an image with explicit options
pub fn normalize_with(
    image: &Pix,
    source: ImageSource,
    enhance: bool,
    options: &NormalizeOptions,
) -> RecogResult<NormalizedTile> {
    options.validate()?;
    let glyph = match source {
        ImageSource::Canvas => canvas_glyph(image, options)?,
        ImageSource::Natural => natural_glyph(image, enhance, options)?,
    };
    NormalizedTile::from_pix(&center_on_tile(&glyph)?)
}

fn canvas_glyph(image: &Pix, options: &NormalizeOptions) -> RecogResult<Pix> {
    let masked = apply_corner_mask(image, options.corner_radius)?;
    let binary = binarize_canvas(&masked, options)?;
    let clean = remove_small_blobs(&binary, options.canvas_min_area)?;
    let (cropped, _) = crop_to_ink(&clean, CropPolicy::FullFrameFallback)?;
    let size = options.canvas_glyph_size;
    Ok(scale_by_sampling_to_size(&cropped, size, size)?)
}

fn natural_glyph(image: &Pix, enhance: bool, options: &NormalizeOptions) -> RecogResult<Pix> {
    let binary = binarize_natural(image, enhance, options)?;
    let clean = remove_small_blobs(&binary, options.natural_min_area)?;
    let (cropped, _) = crop_to_ink(&clean, CropPolicy::RequireInk)?;
    normalize_aspect(&cropped, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecogError;
    use digitscan_core::{PixelDepth, color};

    fn solid(w: u32, h: u32, v: u8) -> Pix {
        let mut pm = Pix::new(w, h, PixelDepth::Bit32).unwrap().to_mut();
        let px = color::compose_rgb(v, v, v);
        for word in pm.data_mut() {
            *word = px;
        }
        pm.into()
    }

    #[test]
    fn test_natural_blank_is_no_ink() {
        let pix = solid(40, 40, 200);
        assert!(matches!(
            normalize(&pix, ImageSource::Natural, true),
            Err(RecogError::NoInkFound)
        ));
    }

    #[test]
    fn test_canvas_blank_without_corners_is_empty_tile() {
        let pix = solid(40, 40, 240);
        let opts = NormalizeOptions::new().with_corner_radius(0);
        let tile = normalize_with(&pix, ImageSource::Canvas, false, &opts).unwrap();
        assert_eq!(tile.ink_count(), 0);
    }

    #[test]
    fn test_canvas_bar_fills_glyph_square() {
        let mut pm = solid(60, 60, 240).to_mut();
        for y in 20..40 {
            for x in 25..35 {
                pm.set_rgb(x, y, 0, 0, 0).unwrap();
            }
        }
        let opts = NormalizeOptions::new().with_corner_radius(0);
        let tile = normalize_with(&pm.into(), ImageSource::Canvas, false, &opts).unwrap();
        // the crop is the bar itself, resampled to 20x20 at offset 4
        assert_eq!(tile.ink_count(), 400);
        assert_eq!(tile.get(4, 4), Some(1.0));
        assert_eq!(tile.get(23, 23), Some(1.0));
        assert_eq!(tile.get(3, 4), Some(0.0));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let pix = solid(10, 10, 0);
        let opts = NormalizeOptions::new().with_target_height(30, 20);
        assert!(matches!(
            normalize_with(&pix, ImageSource::Natural, false, &opts),
            Err(RecogError::InvalidParameter(_))
        ));
    }
}
