//! Error types for the churn-serving crate.
//!
//! This module gathers the full failure taxonomy of the prediction
//! pipeline: artifact loading (fatal to process start) and the three
//! request-level failures (encoding, dimension mismatch, scoring).

use thiserror::Error;

use churn_features::FeatureError;
use churn_model::ModelError;

/// Result type alias for serving operations.
pub type ServingResult<T> = Result<T, ServingError>;

/// Errors raised while loading artifacts or serving a prediction.
#[derive(Debug, Error)]
pub enum ServingError {
    /// A required artifact is missing, unparsable, or inconsistent with
    /// the other artifacts. Fatal to process start, not to a request.
    #[error("Failed to load artifacts: {0}")]
    ArtifactLoad(String),

    /// Feature encoding or scaling failed for the current request.
    #[error(transparent)]
    Feature(#[from] FeatureError),

    /// Model scoring failed for the current request.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// I/O error while reading artifacts.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServingError {
    /// Create an artifact load error.
    pub fn artifact_load(msg: impl Into<String>) -> Self {
        Self::ArtifactLoad(msg.into())
    }

    /// Check if this is a client error (bad request input).
    ///
    /// An unknown category comes from the caller's field values; every
    /// other failure is an artifact or pipeline problem.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Feature(FeatureError::UnknownCategory { .. }))
    }

    /// Check if this failure belongs to artifact loading rather than a
    /// single request.
    pub fn is_artifact_error(&self) -> bool {
        matches!(
            self,
            Self::ArtifactLoad(_) | Self::Io(_) | Self::Model(ModelError::LoadError(_))
        )
    }
}
