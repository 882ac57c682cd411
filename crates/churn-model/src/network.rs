//! Candle-backed inference network for churn scoring.

use std::collections::HashMap;

use candle_core::{Device, Tensor};

use crate::error::{ModelError, ModelResult};
use crate::spec::NetworkSpec;

/// Scoring capability: maps a feature vector to a churn probability.
///
/// The scorer is the opaque `predict(vector) -> score` seam between the
/// feature pipeline and the trained model. Modeling it as a trait keeps
/// the predictor testable against fakes without any model artifact on
/// disk.
pub trait Scorer: Send + Sync {
    /// Width of the feature vector this scorer expects.
    fn input_dim(&self) -> usize;

    /// Scores one feature vector, returning a probability in [0, 1].
    fn score(&self, features: &[f32]) -> ModelResult<f32>;
}

fn tensor_from_params(
    params: &HashMap<String, Vec<f32>>,
    name: &str,
    shape: &[usize],
    device: &Device,
) -> ModelResult<Tensor> {
    let data = params
        .get(name)
        .ok_or_else(|| ModelError::load(format!("missing dense param {:?}", name)))?;
    let numel: usize = shape.iter().product();
    if data.len() != numel {
        return Err(ModelError::load(format!(
            "param {:?} has len {}, expected {} for shape {:?}",
            name,
            data.len(),
            numel,
            shape
        )));
    }
    Tensor::from_slice(data, shape, device)
        .map_err(|e| ModelError::load(format!("tensor init failed for {:?}: {e}", name)))
}

fn linear(x: &Tensor, w: &Tensor, b: &Tensor) -> ModelResult<Tensor> {
    // x: [1, in], w: [out, in], so the matmul runs against w^T.
    let y = x.matmul(&w.t()?)?;
    Ok(y.broadcast_add(b)?)
}

/// The trained churn network: a feed-forward stack built from a
/// [`NetworkSpec`] plus a flat map of dense parameters.
///
/// Parameters follow the exported-artifact naming convention
/// `layers.{i}.weight` (shape `[out, in]`) and `layers.{i}.bias`
/// (shape `[out]`), with the output head at the last index. Hidden
/// layers apply the spec's activation; the single-unit head applies
/// sigmoid so [`score`](Scorer::score) returns a probability.
pub struct ChurnNetwork {
    spec: NetworkSpec,
    // layers: (w, b), output head last
    weights: Vec<(Tensor, Tensor)>,
    device: Device,
}

impl std::fmt::Debug for ChurnNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChurnNetwork")
            .field("spec", &self.spec)
            .field("num_layers", &self.weights.len())
            .finish()
    }
}

impl ChurnNetwork {
    /// Builds the network from its spec and dense parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::LoadError`] if a parameter is missing or
    /// its length disagrees with the layer shape the spec declares.
    pub fn from_params(
        spec: &NetworkSpec,
        params: &HashMap<String, Vec<f32>>,
        device: &Device,
    ) -> ModelResult<Self> {
        if spec.input_dim == 0 {
            return Err(ModelError::load("network input_dim must be positive"));
        }

        let mut all_dims: Vec<usize> = spec.hidden_dims.clone();
        all_dims.push(1); // single-unit churn head

        let mut weights: Vec<(Tensor, Tensor)> = Vec::with_capacity(all_dims.len());
        let mut in_dim = spec.input_dim;
        for (i, &out_dim) in all_dims.iter().enumerate() {
            let w_name = format!("layers.{i}.weight");
            let b_name = format!("layers.{i}.bias");
            let w = tensor_from_params(params, &w_name, &[out_dim, in_dim], device)?;
            let b = tensor_from_params(params, &b_name, &[out_dim], device)?;
            weights.push((w, b));
            in_dim = out_dim;
        }

        Ok(Self {
            spec: spec.clone(),
            weights,
            device: device.clone(),
        })
    }

    /// Returns the network spec.
    pub fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    /// Returns the device the network runs on.
    pub fn device(&self) -> &Device {
        &self.device
    }
}

impl Scorer for ChurnNetwork {
    fn input_dim(&self) -> usize {
        self.spec.input_dim
    }

    fn score(&self, features: &[f32]) -> ModelResult<f32> {
        if features.len() != self.spec.input_dim {
            return Err(ModelError::scoring(format!(
                "input has {} features, network expects {}",
                features.len(),
                self.spec.input_dim
            )));
        }

        let mut x = Tensor::from_slice(features, (1, self.spec.input_dim), &self.device)?;
        for (i, (w, b)) in self.weights.iter().enumerate() {
            x = linear(&x, w, b)?;
            let is_head = i + 1 == self.weights.len();
            if is_head {
                x = candle_nn::ops::sigmoid(&x)?;
            } else {
                x = self.spec.activation.apply(x)?;
            }
        }

        let scores = x.flatten_all()?.to_vec1::<f32>()?;
        let probability = *scores
            .first()
            .ok_or_else(|| ModelError::scoring("network produced an empty output"))?;

        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(ModelError::scoring(format!(
                "network produced a malformed probability: {probability}"
            )));
        }

        Ok(probability)
    }
}
