//! digitscan-morph - Morphological operations for digit tiles
//!
//! This crate provides:
//!
//! - Structuring elements (SEL) for defining operation neighborhoods
//! - Grayscale dilation for 8-bpp images, used to thicken faint strokes

mod error;
pub mod grayscale;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::Sel;

pub use grayscale::{dilate_gray, dilate_gray_brick};
