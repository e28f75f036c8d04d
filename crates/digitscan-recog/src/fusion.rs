//! Feature fusion and linear dimensionality reduction

use crate::{RecogError, RecogResult};

/// Fixed linear projection `(x - mean) · componentsᵀ`
///
/// `components` is row-major with one row of `input_dim` weights per
/// output dimension, as a fitted PCA stores it.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProjection {
    mean: Vec<f32>,
    components: Vec<f32>,
    output_dim: usize,
}

impl LinearProjection {
    /// Create a projection from a mean vector and component rows
    pub fn new(mean: Vec<f32>, components: Vec<f32>, output_dim: usize) -> RecogResult<Self> {
        if mean.is_empty() || output_dim == 0 {
            return Err(RecogError::InvalidParameter(
                "projection dimensions must be positive".to_string(),
            ));
        }
        if components.len() != mean.len() * output_dim {
            return Err(RecogError::InvalidParameter(format!(
                "components length {} doesn't match {} x {}",
                components.len(),
                output_dim,
                mean.len()
            )));
        }
        Ok(Self {
            mean,
            components,
            output_dim,
        })
    }

    /// Length of the vectors this projection accepts
    pub fn input_dim(&self) -> usize {
        self.mean.len()
    }

    /// Length of the projected vectors
    pub fn output_dim(&self) -> usize {
        self.output_dim
    }

    /// Fail unless `len` matches the input dimensionality
    pub fn check_input(&self, len: usize) -> RecogResult<()> {
        if len != self.input_dim() {
            return Err(RecogError::FeatureDimensionMismatch {
                expected: self.input_dim(),
                actual: len,
            });
        }
        Ok(())
    }

    /// Project a feature vector
    pub fn project(&self, features: &[f32]) -> RecogResult<Vec<f32>> {
        self.check_input(features.len())?;
        let centered: Vec<f32> = features
            .iter()
            .zip(&self.mean)
            .map(|(x, m)| x - m)
            .collect();
        Ok(self
            .components
            .chunks_exact(self.input_dim())
            .map(|row| row.iter().zip(&centered).map(|(w, x)| w * x).sum())
            .collect())
    }
}

/// Concatenate a learned embedding and a HOG descriptor
pub fn fuse_features(embedding: &[f32], hog: &[f32]) -> Vec<f32> {
    let mut fused = Vec::with_capacity(embedding.len() + hog.len());
    fused.extend_from_slice(embedding);
    fused.extend_from_slice(hog);
    fused
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project() {
        let proj = LinearProjection::new(vec![1.0, 2.0, 3.0], vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0], 2)
            .unwrap();
        let out = proj.project(&[2.0, 2.0, 5.0]).unwrap();
        assert_eq!(out, vec![1.0, 3.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let proj = LinearProjection::new(vec![0.0; 4], vec![0.0; 8], 2).unwrap();
        match proj.project(&[0.0; 5]) {
            Err(RecogError::FeatureDimensionMismatch { expected, actual }) => {
                assert_eq!((expected, actual), (4, 5));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_bad_components() {
        assert!(LinearProjection::new(vec![0.0; 3], vec![0.0; 5], 2).is_err());
        assert!(LinearProjection::new(vec![], vec![], 1).is_err());
    }

    #[test]
    fn test_fuse() {
        assert_eq!(fuse_features(&[1.0], &[2.0, 3.0]), vec![1.0, 2.0, 3.0]);
    }
}
