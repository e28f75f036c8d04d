//! Tile-model scorer

use super::{ScoreVector, Scorer, ScorerKind, scorer_failure};
use crate::tile::NormalizedTile;
use crate::{RecogError, RecogResult};

/// An opaque model taking the flattened `[1, 28, 28, 1]` tile
pub trait TileModel: Send + Sync {
    /// Run the model on 784 row-major values in [0, 1]
    fn predict(&self, input: &[f32]) -> RecogResult<Vec<f32>>;
}

/// Scores tiles by running a [`TileModel`] on their values
pub struct CnnScorer {
    model: Box<dyn TileModel>,
}

impl CnnScorer {
    pub fn new(model: impl TileModel + 'static) -> Self {
        Self {
            model: Box::new(model),
        }
    }
}

impl Scorer for CnnScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Cnn
    }

    fn score(&self, tile: &NormalizedTile) -> RecogResult<ScoreVector> {
        let scores = self
            .model
            .predict(tile.values())
            .map_err(scorer_failure("model"))?;
        if scores.is_empty() {
            return Err(RecogError::ScorerFailure(
                "model returned no scores".to_string(),
            ));
        }
        Ok(scores)
    }
}
