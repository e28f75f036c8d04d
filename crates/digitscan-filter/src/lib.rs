//! digitscan-filter - Image filtering operations
//!
//! This crate provides the filters used while binarizing photographed
//! digits:
//!
//! - Convolution with arbitrary kernels
//! - Sharpening with the 3x3 cross kernel
//! - Bilateral filtering (edge-preserving smoothing)

pub mod bilateral;
pub mod convolve;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

pub use bilateral::{bilateral, make_range_kernel};
pub use convolve::{convolve_gray, sharpen};
