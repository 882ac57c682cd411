//! Churn scoring backend.
//!
//! This crate holds the trained network consumed at inference time:
//!
//! - [`Scorer`]: the capability trait mapping a feature vector to a
//!   churn probability.
//! - [`ChurnNetwork`]: a Candle-backed feed-forward implementation
//!   built from a serialized [`NetworkSpec`] plus flat dense
//!   parameters.
//!
//! Training and export happen offline; this crate only reconstructs
//! the network from its artifact and runs the forward pass.

#![warn(missing_docs)]

pub mod error;
pub mod network;
pub mod spec;

pub use candle_core::Device;
pub use error::{ModelError, ModelResult};
pub use network::{ChurnNetwork, Scorer};
pub use spec::{Activation, NetworkSpec};
