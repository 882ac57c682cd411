//! Error types for the churn-model crate.

use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while building or scoring the network.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model artifact is missing parameters or its parameters do
    /// not match the declared network shape.
    #[error("Failed to load model: {0}")]
    LoadError(String),

    /// Scoring failed or produced a malformed output.
    #[error("Scoring failed: {0}")]
    Scoring(String),
}

impl ModelError {
    /// Create a model load error.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::LoadError(msg.into())
    }

    /// Create a scoring error.
    pub fn scoring(msg: impl Into<String>) -> Self {
        Self::Scoring(msg.into())
    }
}

impl From<candle_core::Error> for ModelError {
    fn from(err: candle_core::Error) -> Self {
        ModelError::Scoring(err.to_string())
    }
}
