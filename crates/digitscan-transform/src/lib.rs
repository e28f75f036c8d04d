//! digitscan-transform - Geometric transformations for digitscan
//!
//! This crate provides scaling to an exact output size:
//!
//! - Nearest-neighbor sampling (canvas tiles)
//! - Area mapping (photographed digits)

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{ScaleMethod, scale_area_map_to_size, scale_by_sampling_to_size, scale_to_size};
