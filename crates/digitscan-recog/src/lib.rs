//! digitscan-recog - Handwritten digit normalization and classification
//!
//! This crate provides:
//!
//! - **Normalization**: canvas and photo captures to a centered 28x28 tile
//! - **Scoring**: a tile model, or embedding + HOG features through a
//!   linear projection into a probability classifier
//! - **Interpretation**: top-two ranking with an ambiguity threshold
//! - **Registry**: one swappable scorer configuration shared by all requests
//!
//! # Quick Start
//!
//! ```no_run
//! use digitscan_recog::{
//!     ActiveScorer, CnnScorer, ImageSource, LabelTable, LinearSoftmax, ScorerRegistry,
//!     classify, normalize,
//! };
//! use digitscan_core::Pix;
//!
//! # fn weights() -> (Vec<f32>, Vec<f32>) { (vec![0.0; 7840], vec![0.0; 10]) }
//! let (w, b) = weights();
//! let registry = ScorerRegistry::with_active(ActiveScorer::new(
//!     CnnScorer::new(LinearSoftmax::new(w, b).unwrap()),
//!     LabelTable::digits(),
//! ));
//!
//! let image: Pix = digitscan_io::read_image("digit.png").unwrap();
//! let tile = normalize(&image, ImageSource::Natural, true).unwrap();
//! let decision = classify(&tile, &registry);
//! println!("{} ({:.3})", decision.label, decision.confidence);
//! ```
//!
//! # Modules
//!
//! - [`normalize`]: the image stages
//! - [`hog`], [`fusion`]: hand-crafted features and projection
//! - [`scorer`]: scorer trait and implementations
//! - [`interpret`]: decisions from scores
//! - [`registry`]: active scorer configuration

pub mod classify;
pub mod debug;
mod error;
pub mod fusion;
pub mod hog;
pub mod interpret;
pub mod labels;
pub mod normalize;
pub mod options;
pub mod recognizer;
pub mod registry;
pub mod scorer;
pub mod tile;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use classify::{classify, classify_with, try_classify, try_classify_with};
pub use debug::{DebugSink, PngDirSink};
pub use fusion::{LinearProjection, fuse_features};
pub use hog::hog_descriptor;
pub use interpret::{Decision, Ranking, ScoreInterpreter};
pub use labels::LabelTable;
pub use normalize::{normalize, normalize_with};
pub use options::{HogOptions, ImageSource, InterpretOptions, NormalizeOptions, TILE_SIZE};
pub use recognizer::{RecognizeConfig, Recognizer};
pub use registry::{ActiveScorer, RegistryStatus, ScorerRegistry};
pub use scorer::{
    CnnScorer, EmbeddingExtractor, LinearSoftmax, ProbabilityClassifier, ScoreVector, Scorer,
    ScorerKind, SvmScorer, TileModel,
};
pub use tile::NormalizedTile;

// Re-export core for convenience
pub use digitscan_core;
