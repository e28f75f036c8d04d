//! Fused-feature scorer

use super::{ScoreVector, Scorer, ScorerKind, scorer_failure};
use crate::fusion::{LinearProjection, fuse_features};
use crate::hog::hog_descriptor;
use crate::options::HogOptions;
use crate::tile::NormalizedTile;
use crate::{RecogError, RecogResult};
use digitscan_core::FPix;
use tracing::debug;

/// An opaque model producing a learned embedding of a tile
pub trait EmbeddingExtractor: Send + Sync {
    fn extract(&self, tile: &NormalizedTile) -> RecogResult<Vec<f32>>;
}

/// An opaque classifier producing per-class probabilities
pub trait ProbabilityClassifier: Send + Sync {
    fn predict_proba(&self, features: &[f32]) -> RecogResult<Vec<f32>>;
}

/// Scores tiles from embedding ++ HOG features
///
/// The fused vector must match the projection's input length; this is
/// checked before the classifier runs.
pub struct SvmScorer {
    extractor: Box<dyn EmbeddingExtractor>,
    projection: LinearProjection,
    classifier: Box<dyn ProbabilityClassifier>,
    hog: HogOptions,
}

impl SvmScorer {
    pub fn new(
        extractor: impl EmbeddingExtractor + 'static,
        projection: LinearProjection,
        classifier: impl ProbabilityClassifier + 'static,
    ) -> Self {
        Self {
            extractor: Box::new(extractor),
            projection,
            classifier: Box::new(classifier),
            hog: HogOptions::default(),
        }
    }

    /// Use non-default HOG parameters
    pub fn with_hog_options(mut self, hog: HogOptions) -> Self {
        self.hog = hog;
        self
    }

    /// Fused feature vector of a tile, before projection
    ///
    /// Extractor and HOG errors are reported as scorer failures.
    pub fn features(&self, tile: &NormalizedTile) -> RecogResult<Vec<f32>> {
        let embedding = self
            .extractor
            .extract(tile)
            .map_err(scorer_failure("embedding"))?;

        let mut scaled: FPix = tile.as_fpix().clone();
        scaled.mul_constant(255.0);
        let hog = hog_descriptor(&scaled, &self.hog).map_err(scorer_failure("hog"))?;

        let fused = fuse_features(&embedding, &hog);
        debug!(
            embedding = embedding.len(),
            hog = hog.len(),
            fused = fused.len(),
            expected = self.projection.input_dim(),
            "fused features"
        );
        Ok(fused)
    }
}

impl Scorer for SvmScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Svm
    }

    fn score(&self, tile: &NormalizedTile) -> RecogResult<ScoreVector> {
        let fused = self.features(tile)?;
        self.projection.check_input(fused.len())?;
        let projected = self.projection.project(&fused)?;
        let scores = self
            .classifier
            .predict_proba(&projected)
            .map_err(scorer_failure("classifier"))?;
        if scores.is_empty() {
            return Err(RecogError::ScorerFailure(
                "classifier returned no scores".to_string(),
            ));
        }
        Ok(scores)
    }
}
