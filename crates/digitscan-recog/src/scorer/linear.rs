//! Linear model with softmax output

use super::{ProbabilityClassifier, TileModel};
use crate::{RecogError, RecogResult};

/// `softmax(W · x + b)` with one weight row per class
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSoftmax {
    weights: Vec<f32>,
    bias: Vec<f32>,
    input_dim: usize,
}

impl LinearSoftmax {
    /// Create a model from row-major weights (`classes x input_dim`) and biases
    pub fn new(weights: Vec<f32>, bias: Vec<f32>) -> RecogResult<Self> {
        if bias.is_empty() || weights.is_empty() || weights.len() % bias.len() != 0 {
            return Err(RecogError::InvalidParameter(format!(
                "{} weights can't be split into {} class rows",
                weights.len(),
                bias.len()
            )));
        }
        let input_dim = weights.len() / bias.len();
        Ok(Self {
            weights,
            bias,
            input_dim,
        })
    }

    /// Number of classes
    pub fn classes(&self) -> usize {
        self.bias.len()
    }

    /// Probabilities for one input vector
    pub fn probabilities(&self, input: &[f32]) -> RecogResult<Vec<f32>> {
        if input.len() != self.input_dim {
            return Err(RecogError::FeatureDimensionMismatch {
                expected: self.input_dim,
                actual: input.len(),
            });
        }
        let logits: Vec<f32> = self
            .weights
            .chunks_exact(self.input_dim)
            .zip(&self.bias)
            .map(|(row, b)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f32>() + b)
            .collect();
        Ok(softmax(&logits))
    }
}

fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

impl TileModel for LinearSoftmax {
    fn predict(&self, input: &[f32]) -> RecogResult<Vec<f32>> {
        self.probabilities(input)
    }
}

impl ProbabilityClassifier for LinearSoftmax {
    fn predict_proba(&self, features: &[f32]) -> RecogResult<Vec<f32>> {
        self.probabilities(features)
    }
}
