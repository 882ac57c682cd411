//! Domain types for customer churn prediction.
//!
//! This crate defines the request-scoped input record, the prediction
//! result, and the churn classification threshold shared by the feature
//! pipeline, the scoring backend, and the user-facing surface:
//!
//! - [`CustomerRecord`]: the raw field values collected for one prediction.
//! - [`PredictionResult`]: a probability plus its derived binary label.
//! - [`ChurnLabel`]: the binary outcome of thresholding the probability.
//!
//! # Quick Start
//!
//! ```
//! use churn_core::{ChurnLabel, PredictionResult};
//!
//! let result = PredictionResult::from_probability(0.73);
//! assert_eq!(result.label, ChurnLabel::LikelyToChurn);
//! ```

#![warn(missing_docs)]

pub mod prediction;
pub mod record;

pub use prediction::{ChurnLabel, PredictionResult, CHURN_THRESHOLD};
pub use record::CustomerRecord;
