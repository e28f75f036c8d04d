//! Height normalization of photographed glyphs

use crate::RecogResult;
use crate::options::NormalizeOptions;
use digitscan_core::Pix;
use digitscan_morph::dilate_gray_brick;
use digitscan_transform::scale_area_map_to_size;
use tracing::debug;

/// Target geometry for a crop of a given size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectPlan {
    /// Glyph height after scaling, within the configured band
    pub target_height: u32,
    /// Uniform scale factor, `target_height / height`
    pub scale: f64,
    /// Output width, at least 1
    pub new_width: u32,
    /// Output height, `floor(height * scale)` and at least 1
    ///
    /// Rounding can leave this one pixel short of `target_height`.
    pub new_height: u32,
}

impl AspectPlan {
    /// Plan the resize of a `width` x `height` crop
    pub fn new(width: u32, height: u32, options: &NormalizeOptions) -> Self {
        let target_height = height.clamp(options.min_target_height, options.max_target_height);
        let scale = target_height as f64 / height.max(1) as f64;
        Self {
            target_height,
            scale,
            new_width: ((width as f64 * scale).floor() as u32).max(1),
            new_height: ((height as f64 * scale).floor() as u32).max(1),
        }
    }
}

/// Resize a binary crop to the target height and thicken sparse strokes
///
/// The crop is resized with area averaging, so edges become gray. Any
/// non-zero pixel counts as ink. When the ink count or density falls below
/// the configured limits, the glyph is dilated once with a 2x2 brick.
pub fn normalize_aspect(pix: &Pix, options: &NormalizeOptions) -> RecogResult<Pix> {
    let plan = AspectPlan::new(pix.width(), pix.height(), options);
    let resized = scale_area_map_to_size(pix, plan.new_width, plan.new_height)?;

    let ink = resized.count_nonzero();
    let density = ink as f64 / (plan.new_width as f64 * plan.new_height as f64);
    let thicken = ink < options.min_ink_pixels as u64 || density < options.min_ink_density;
    debug!(
        target_height = plan.target_height,
        scale = plan.scale,
        ink,
        density,
        thicken,
        "aspect normalized"
    );

    if thicken {
        Ok(dilate_gray_brick(&resized, 2, 2)?)
    } else {
        Ok(resized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitscan_core::PixelDepth;

    #[test]
    fn test_plan_band() {
        let opts = NormalizeOptions::default();
        for h in 1..200 {
            let plan = AspectPlan::new(10, h, &opts);
            assert!((21..=24).contains(&plan.target_height));
            assert!(plan.scale > 0.0);
        }
        let plan = AspectPlan::new(30, 60, &opts);
        assert_eq!(plan.target_height, 24);
        assert_eq!((plan.new_width, plan.new_height), (12, 24));
        let plan = AspectPlan::new(3, 7, &opts);
        assert_eq!(plan.target_height, 21);
        assert_eq!((plan.new_width, plan.new_height), (9, 21));
        let plan = AspectPlan::new(1, 200, &opts);
        assert_eq!(plan.new_width, 1);
    }

    #[test]
    fn test_plan_square_keeps_aspect() {
        let opts = NormalizeOptions::default();
        // 47 * (24 / 47) lands just under 24 in floating point
        let plan = AspectPlan::new(47, 47, &opts);
        assert_eq!(plan.target_height, 24);
        assert_eq!((plan.new_width, plan.new_height), (23, 23));
        for h in 1..400 {
            let plan = AspectPlan::new(h, h, &opts);
            assert_eq!(plan.new_width, plan.new_height, "square crop of {h}");
            assert!(plan.new_height <= plan.target_height);
            assert!(plan.new_height + 1 >= plan.target_height);
        }

        let pix = Pix::new(47, 47, PixelDepth::Bit8).unwrap().invert();
        let out = normalize_aspect(&pix, &opts).unwrap();
        assert_eq!((out.width(), out.height()), (23, 23));
    }

    #[test]
    fn test_dense_glyph_not_thickened() {
        let pix = Pix::new(12, 22, PixelDepth::Bit8).unwrap().invert();
        let out = normalize_aspect(&pix, &NormalizeOptions::default()).unwrap();
        assert_eq!((out.width(), out.height()), (12, 22));
        assert_eq!(out.count_nonzero(), 12 * 22);
    }

    #[test]
    fn test_thin_glyph_thickened() {
        // one-pixel vertical line, 22 tall: 22 ink pixels, density 1/12
        let mut pm = Pix::new(12, 22, PixelDepth::Bit8).unwrap().to_mut();
        for y in 0..22 {
            pm.set_pixel(5, y, 255).unwrap();
        }
        let out = normalize_aspect(&pm.into(), &NormalizeOptions::default()).unwrap();
        assert_eq!(out.count_nonzero(), 44);
        assert_eq!(out.get_pixel(6, 10), Some(255));
        assert_eq!(out.get_pixel(4, 10), Some(0));
    }
}
