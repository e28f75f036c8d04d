//! digitscan - Handwritten digit recognition
//!
//! Turns a capture of a single handwritten digit into a classification
//! decision.
//!
//! # Overview
//!
//! - Image I/O (PNG, JPEG, BMP, GIF, WebP, TIFF)
//! - Corner masking, bilateral smoothing and sharpening
//! - Fixed-threshold binarization with polarity normalization
//! - Connected-component blob filtering and ink cropping
//! - Height normalization with area averaging and stroke thickening
//! - 28x28 tile scoring, HOG features and top-two interpretation
//!
//! # Example
//!
//! ```
//! use digitscan::recog::{ImageSource, NormalizeOptions, normalize_with};
//! use digitscan::{Pix, PixelDepth};
//!
//! // A light canvas with one dark vertical stroke
//! let mut pm = Pix::new(60, 60, PixelDepth::Bit32).unwrap().to_mut();
//! for y in 0..60 {
//!     for x in 0..60 {
//!         let v = if (28..32).contains(&x) && (10..50).contains(&y) { 0 } else { 240 };
//!         pm.set_rgb(x, y, v, v, v).unwrap();
//!     }
//! }
//! let pix: Pix = pm.into();
//!
//! let options = NormalizeOptions::new().with_corner_radius(0);
//! let tile = normalize_with(&pix, ImageSource::Canvas, false, &options).unwrap();
//! assert_eq!(tile.ink_count(), 400);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use digitscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use digitscan_color as color;
pub use digitscan_filter as filter;
pub use digitscan_io as io;
pub use digitscan_morph as morph;
pub use digitscan_recog as recog;
pub use digitscan_region as region;
pub use digitscan_transform as transform;
