//! Per-column affine scaling fitted offline.

use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, FeatureResult};

/// Applies a fixed per-column standardization `(x - mean) / scale`.
///
/// The mean and scale vectors are fitted offline and loaded as part of
/// the artifact bundle; they must be applied identically at inference
/// time to the vector layout they were fitted on. The width check in
/// [`transform`](Self::transform) is the primary integrity check the
/// pipeline has: a vector of the wrong width fails here rather than
/// producing a silently wrong prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-column centers.
    mean: Vec<f32>,
    /// Per-column scale divisors.
    scale: Vec<f32>,
}

impl StandardScaler {
    /// Builds a scaler from fitted mean and scale vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors are empty, differ in length, or
    /// any scale entry is zero or non-finite.
    pub fn from_params(mean: Vec<f32>, scale: Vec<f32>) -> FeatureResult<Self> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Checks the fitted state for internal consistency.
    pub fn validate(&self) -> FeatureResult<()> {
        if self.mean.is_empty() {
            return Err(FeatureError::invalid_artifact("scaler has no columns"));
        }
        if self.mean.len() != self.scale.len() {
            return Err(FeatureError::invalid_artifact(format!(
                "scaler mean has {} columns but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        for (i, &s) in self.scale.iter().enumerate() {
            if s == 0.0 || !s.is_finite() {
                return Err(FeatureError::invalid_artifact(format!(
                    "scaler column {} has unusable scale {}",
                    i, s
                )));
            }
        }
        Ok(())
    }

    /// Standardizes a feature vector column by column.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::DimensionMismatch`] if the input length
    /// does not equal the fitted width.
    pub fn transform(&self, features: &[f32]) -> FeatureResult<Vec<f32>> {
        if features.len() != self.mean.len() {
            return Err(FeatureError::DimensionMismatch {
                expected: self.mean.len(),
                actual: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&x, (&m, &s))| (x - m) / s)
            .collect())
    }

    /// Returns the fitted input width.
    pub fn input_dim(&self) -> usize {
        self.mean.len()
    }
}
