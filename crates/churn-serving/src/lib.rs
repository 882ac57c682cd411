//! Artifact loading and the churn prediction engine.
//!
//! This crate wires the feature pipeline and the scoring backend into
//! the single operation the application exposes:
//!
//! - [`ArtifactBundle`]: the encoders, scaler, and network loaded once
//!   from an artifact directory at process start.
//! - [`ChurnPredictor`]: assemble, scale, score, and classify one
//!   [`CustomerRecord`](churn_core::CustomerRecord) per request.
//! - [`ServingError`]: the full failure taxonomy, with helpers to tell
//!   bad request input apart from artifact problems.

#![warn(missing_docs)]

pub mod artifacts;
pub mod error;
pub mod predictor;

pub use artifacts::ArtifactBundle;
pub use error::{ServingError, ServingResult};
pub use predictor::ChurnPredictor;
