//! Option structs for normalization, HOG extraction and score interpretation

use crate::{RecogError, RecogResult};
use serde::{Deserialize, Serialize};

/// Side length of the normalized tile handed to scorers
pub const TILE_SIZE: u32 = 28;

/// Where an input image came from
///
/// The two sources go through different normalization paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Drawing surface: dark strokes on a light canvas with rounded corners
    Canvas,
    /// Camera or photo capture
    #[default]
    Natural,
}

/// Options for turning a raw image into a normalized tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Radius of the rounded-corner mask on canvas images (default: 10)
    pub corner_radius: u32,
    /// Canvas gray levels below this are ink (default: 200)
    pub canvas_threshold: u8,
    /// Smallest component kept on the canvas path (default: 5)
    pub canvas_min_area: u32,
    /// Side of the square the canvas crop is resampled to (default: 20)
    pub canvas_glyph_size: u32,

    /// Bilateral filter diameter (default: 9)
    pub bilateral_diameter: u32,
    /// Bilateral range sigma (default: 75.0)
    pub bilateral_range_sigma: f32,
    /// Bilateral spatial sigma (default: 75.0)
    pub bilateral_spatial_sigma: f32,
    /// Mean gray level above which a photo is inverted (default: 40.0)
    pub invert_brightness: f64,
    /// Photo gray levels above this are ink after inversion (default: 127)
    pub natural_threshold: u8,
    /// Smallest component kept on the natural path (default: 30)
    pub natural_min_area: u32,

    /// Lower bound of the target glyph height (default: 21)
    pub min_target_height: u32,
    /// Upper bound of the target glyph height (default: 24)
    pub max_target_height: u32,
    /// Thicken strokes when fewer ink pixels than this remain (default: 70)
    pub min_ink_pixels: u32,
    /// Thicken strokes when ink density is below this (default: 0.25)
    pub min_ink_density: f64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            corner_radius: 10,
            canvas_threshold: 200,
            canvas_min_area: 5,
            canvas_glyph_size: 20,
            bilateral_diameter: 9,
            bilateral_range_sigma: 75.0,
            bilateral_spatial_sigma: 75.0,
            invert_brightness: 40.0,
            natural_threshold: 127,
            natural_min_area: 30,
            min_target_height: 21,
            max_target_height: 24,
            min_ink_pixels: 70,
            min_ink_density: 0.25,
        }
    }
}

impl NormalizeOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas corner radius
    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the minimum component area for both paths
    pub fn with_min_areas(mut self, canvas: u32, natural: u32) -> Self {
        self.canvas_min_area = canvas;
        self.natural_min_area = natural;
        self
    }

    /// Set the target height band of the natural path
    pub fn with_target_height(mut self, min: u32, max: u32) -> Self {
        self.min_target_height = min;
        self.max_target_height = max;
        self
    }

    /// Set the stroke-thickening limits
    pub fn with_thickening(mut self, min_pixels: u32, min_density: f64) -> Self {
        self.min_ink_pixels = min_pixels;
        self.min_ink_density = min_density;
        self
    }

    /// Set the bilateral filter parameters
    pub fn with_bilateral(mut self, diameter: u32, range_sigma: f32, spatial_sigma: f32) -> Self {
        self.bilateral_diameter = diameter;
        self.bilateral_range_sigma = range_sigma;
        self.bilateral_spatial_sigma = spatial_sigma;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if self.canvas_glyph_size == 0 || self.canvas_glyph_size > TILE_SIZE {
            return Err(RecogError::InvalidParameter(format!(
                "canvas_glyph_size must be in 1..={TILE_SIZE}"
            )));
        }
        if self.min_target_height == 0 || self.min_target_height > self.max_target_height {
            return Err(RecogError::InvalidParameter(
                "target height band must satisfy 0 < min <= max".to_string(),
            ));
        }
        if self.bilateral_diameter == 0 {
            return Err(RecogError::InvalidParameter(
                "bilateral_diameter must be positive".to_string(),
            ));
        }
        if self.bilateral_range_sigma <= 0.0 || self.bilateral_spatial_sigma <= 0.0 {
            return Err(RecogError::InvalidParameter(
                "bilateral sigmas must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_ink_density) {
            return Err(RecogError::InvalidParameter(
                "min_ink_density must be in [0, 1]".to_string(),
            ));
        }
        Ok(())
    }
}

/// Options for the histogram-of-oriented-gradients descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HogOptions {
    /// Number of unsigned orientation bins over [0, 180) (default: 9)
    pub orientations: usize,
    /// Cell side in pixels (default: 4)
    pub pixels_per_cell: u32,
    /// Block side in cells (default: 2)
    pub cells_per_block: u32,
    /// Take the square root of the image before computing gradients (default: true)
    pub transform_sqrt: bool,
    /// Clipping level of L2-Hys block normalization (default: 0.2)
    pub clip: f32,
}

impl Default for HogOptions {
    fn default() -> Self {
        Self {
            orientations: 9,
            pixels_per_cell: 4,
            cells_per_block: 2,
            transform_sqrt: true,
            clip: 0.2,
        }
    }
}

impl HogOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor length for an image of the given size
    pub fn descriptor_len(&self, width: u32, height: u32) -> usize {
        let cells_x = width / self.pixels_per_cell;
        let cells_y = height / self.pixels_per_cell;
        if cells_x < self.cells_per_block || cells_y < self.cells_per_block {
            return 0;
        }
        let blocks_x = (cells_x - self.cells_per_block + 1) as usize;
        let blocks_y = (cells_y - self.cells_per_block + 1) as usize;
        let per_block = (self.cells_per_block * self.cells_per_block) as usize;
        blocks_x * blocks_y * per_block * self.orientations
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if self.orientations == 0 {
            return Err(RecogError::InvalidParameter(
                "orientations must be positive".to_string(),
            ));
        }
        if self.pixels_per_cell == 0 || self.cells_per_block == 0 {
            return Err(RecogError::InvalidParameter(
                "cell and block sizes must be positive".to_string(),
            ));
        }
        if self.clip <= 0.0 {
            return Err(RecogError::InvalidParameter(
                "clip must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Options for turning scores into a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpretOptions {
    /// Minimum gap between the top two scores for a confident label (default: 0.05)
    pub ambiguity_threshold: f32,
}

impl Default for InterpretOptions {
    fn default() -> Self {
        Self {
            ambiguity_threshold: 0.05,
        }
    }
}

impl InterpretOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ambiguity threshold
    pub fn with_ambiguity_threshold(mut self, threshold: f32) -> Self {
        self.ambiguity_threshold = threshold;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        if self.ambiguity_threshold.is_nan() || self.ambiguity_threshold < 0.0 {
            return Err(RecogError::InvalidParameter(
                "ambiguity_threshold must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
