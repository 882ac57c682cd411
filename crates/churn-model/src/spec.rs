//! Serialized description of the churn network.

use serde::{Deserialize, Serialize};

/// Hidden-layer activation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// Rectified linear unit.
    #[default]
    Relu,
    /// Hyperbolic tangent.
    Tanh,
    /// Logistic sigmoid.
    Sigmoid,
}

impl Activation {
    pub(crate) fn apply(&self, t: candle_core::Tensor) -> candle_core::Result<candle_core::Tensor> {
        match self {
            Activation::Relu => t.relu(),
            Activation::Tanh => t.tanh(),
            Activation::Sigmoid => candle_nn::ops::sigmoid(&t),
        }
    }
}

/// Shape of the trained churn network, stored next to its dense
/// parameters in the model artifact (`model_spec.json`).
///
/// The network is a feed-forward stack: each hidden layer applies the
/// configured activation, and the single-unit output head applies
/// sigmoid so the score is a probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Width of the input feature vector.
    pub input_dim: usize,

    /// Hidden layer widths, in order.
    pub hidden_dims: Vec<usize>,

    /// Activation applied after each hidden layer.
    #[serde(default)]
    pub activation: Activation,
}

impl NetworkSpec {
    /// Total number of dense layers, including the output head.
    pub fn num_layers(&self) -> usize {
        self.hidden_dims.len() + 1
    }
}
