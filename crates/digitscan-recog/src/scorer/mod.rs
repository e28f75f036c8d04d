//! Scorers: normalized tile in, per-class scores out
//!
//! Two concrete scorers exist, selected by [`ScorerKind`]:
//!
//! - [`CnnScorer`] feeds the tile to an opaque [`TileModel`].
//! - [`SvmScorer`] fuses an embedding from an [`EmbeddingExtractor`] with a
//!   HOG descriptor, projects the result and scores it with a
//!   [`ProbabilityClassifier`].
//!
//! The model traits are the seams where trained artifacts plug in.
//! [`LinearSoftmax`] is a plain implementation of them.

mod cnn;
mod linear;
mod svm;

pub use cnn::{CnnScorer, TileModel};
pub use linear::LinearSoftmax;
pub use svm::{EmbeddingExtractor, ProbabilityClassifier, SvmScorer};

use crate::tile::NormalizedTile;
use crate::{RecogError, RecogResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-class scores, aligned with a label table
pub type ScoreVector = Vec<f32>;

/// Which scorer configuration is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScorerKind {
    /// Convolutional model on the raw tile
    #[default]
    #[serde(rename = "CNN", alias = "cnn")]
    Cnn,
    /// Embedding + HOG, projected, scored by a probability classifier
    #[serde(rename = "SVM", alias = "svm")]
    Svm,
}

impl ScorerKind {
    /// Name used by hosts and in logs
    pub fn as_str(self) -> &'static str {
        match self {
            ScorerKind::Cnn => "CNN",
            ScorerKind::Svm => "SVM",
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScorerKind {
    type Err = RecogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CNN" => Ok(ScorerKind::Cnn),
            "SVM" => Ok(ScorerKind::Svm),
            _ => Err(RecogError::InvalidParameter(format!(
                "unsupported model: {s}"
            ))),
        }
    }
}

/// Report a model-side error as a [`RecogError::ScorerFailure`] for `stage`
///
/// Errors that already are scorer failures pass through unchanged.
pub(crate) fn scorer_failure(stage: &'static str) -> impl FnOnce(RecogError) -> RecogError {
    move |err| match err {
        RecogError::ScorerFailure(_) => err,
        other => RecogError::ScorerFailure(format!("{stage}: {other}")),
    }
}

/// Turns a normalized tile into per-class scores
pub trait Scorer: Send + Sync {
    /// Kind of this scorer
    fn kind(&self) -> ScorerKind;

    /// Score one tile
    fn score(&self, tile: &NormalizedTile) -> RecogResult<ScoreVector>;
}
