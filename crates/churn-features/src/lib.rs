//! Feature engineering for churn prediction.
//!
//! This crate turns a raw [`CustomerRecord`](churn_core::CustomerRecord)
//! into the numeric vector the model was trained on:
//!
//! - [`LabelEncoder`]: ordinal encoding for the gender field.
//! - [`OneHotEncoder`]: one-hot expansion for the geography field.
//! - [`StandardScaler`]: the per-column affine normalization fitted
//!   offline alongside the model.
//! - [`FeatureAssembler`]: fixed-order concatenation of all fields.
//!
//! The encoders and the scaler are serde types; their on-disk artifacts
//! are JSON documents produced by the offline training pipeline and
//! loaded unchanged at inference time.
//!
//! # Quick Start
//!
//! ```
//! use churn_features::{FeatureAssembler, LabelEncoder, OneHotEncoder};
//!
//! let assembler = FeatureAssembler::new(
//!     LabelEncoder::from_classes("gender", ["Female", "Male"]).unwrap(),
//!     OneHotEncoder::from_categories("geography", ["France", "Germany", "Spain"]).unwrap(),
//! );
//! assert_eq!(assembler.output_dim(), 12);
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod error;
pub mod label;
pub mod onehot;
pub mod scaler;

pub use assembler::{FeatureAssembler, NUM_BASE_FEATURES};
pub use error::{FeatureError, FeatureResult};
pub use label::LabelEncoder;
pub use onehot::OneHotEncoder;
pub use scaler::StandardScaler;
