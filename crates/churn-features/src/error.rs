//! Error types for the churn-features crate.
//!
//! This module defines the errors raised while encoding categorical
//! fields, scaling numeric vectors, and assembling feature vectors.

use thiserror::Error;

/// Errors raised by encoders, the scaler, and the assembler.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// A categorical value is not among the categories an encoder was
    /// fitted on.
    #[error("Unknown category for {feature}: {value:?}")]
    UnknownCategory {
        /// The feature the value was supplied for.
        feature: String,
        /// The unrecognized value.
        value: String,
    },

    /// A vector's width disagrees with the width a transform was
    /// fitted on.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The fitted width.
        expected: usize,
        /// The width that was provided.
        actual: usize,
    },

    /// An encoder or scaler artifact is internally inconsistent.
    #[error("Invalid artifact: {message}")]
    InvalidArtifact {
        /// Description of the inconsistency.
        message: String,
    },
}

impl FeatureError {
    /// Create an unknown-category error.
    pub fn unknown_category(feature: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            feature: feature.into(),
            value: value.into(),
        }
    }

    /// Create an invalid-artifact error.
    pub fn invalid_artifact(message: impl Into<String>) -> Self {
        Self::InvalidArtifact {
            message: message.into(),
        }
    }
}

/// Result type alias for feature operations.
pub type FeatureResult<T> = Result<T, FeatureError>;
