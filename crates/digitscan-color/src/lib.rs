//! digitscan Color - Grayscale conversion and binarization
//!
//! - **Grayscale** ([`colorspace`]): truncated channel-mean conversion
//! - **Thresholding** ([`threshold`]): fixed-threshold binarization with
//!   selectable polarity, and polarity normalization by mean brightness

pub mod colorspace;
pub mod error;
pub mod threshold;

pub use error::{ColorError, ColorResult};

pub use colorspace::{pix_convert_to_gray, rgb_to_gray};
pub use threshold::{Polarity, normalize_polarity, threshold_to_binary};
