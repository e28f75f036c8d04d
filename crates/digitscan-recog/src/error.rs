//! Error types for digitscan-recog

use thiserror::Error;

/// Errors that can occur during normalization and classification
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] digitscan_core::Error),

    /// Filter stage error
    #[error("filter error: {0}")]
    Filter(#[from] digitscan_filter::FilterError),

    /// Connected-component stage error
    #[error("region error: {0}")]
    Region(#[from] digitscan_region::RegionError),

    /// Morphology stage error
    #[error("morph error: {0}")]
    Morph(#[from] digitscan_morph::MorphError),

    /// Scaling stage error
    #[error("transform error: {0}")]
    Transform(#[from] digitscan_transform::TransformError),

    /// Grayscale/threshold stage error
    #[error("color error: {0}")]
    Color(#[from] digitscan_color::ColorError),

    /// Image output error
    #[error("io error: {0}")]
    Io(#[from] digitscan_io::IoError),

    /// Label table could not be parsed
    #[error("label table error: {0}")]
    Labels(#[from] serde_json::Error),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No ink survived binarization and blob filtering
    #[error("no digit found in image")]
    NoInkFound,

    /// Classification requested before any scorer was loaded
    #[error("model not loaded")]
    ModelNotLoaded,

    /// Fused feature vector does not match the projection input
    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    FeatureDimensionMismatch { expected: usize, actual: usize },

    /// An opaque scoring function failed
    #[error("scorer failure: {0}")]
    ScorerFailure(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
