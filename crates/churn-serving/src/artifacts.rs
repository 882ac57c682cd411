//! Loading the trained artifact bundle from disk.
//!
//! Artifacts are produced by the offline training pipeline and loaded
//! unchanged, once, at process start:
//!
//! - `gender_encoder.json`: ordered gender classes.
//! - `geography_encoder.json`: ordered geography categories.
//! - `scaler.json`: per-column mean/scale vectors.
//! - `model_spec.json` + `dense/params.json`: network shape and flat
//!   dense parameters.
//!
//! Any missing or unparsable file fails the load; after parsing, the
//! bundle cross-checks that the scaler and the network agree on the
//! assembled vector width, so a mismatched artifact set is rejected at
//! startup instead of failing on the first request.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use churn_features::{
    FeatureAssembler, LabelEncoder, OneHotEncoder, StandardScaler, NUM_BASE_FEATURES,
};
use churn_model::{ChurnNetwork, Device, NetworkSpec, Scorer};

use crate::error::{ServingError, ServingResult};

/// File name of the gender encoder artifact.
pub const GENDER_ENCODER_FILE: &str = "gender_encoder.json";
/// File name of the geography encoder artifact.
pub const GEOGRAPHY_ENCODER_FILE: &str = "geography_encoder.json";
/// File name of the scaler artifact.
pub const SCALER_FILE: &str = "scaler.json";
/// File name of the network spec artifact.
pub const MODEL_SPEC_FILE: &str = "model_spec.json";
/// Relative path of the dense parameter artifact.
pub const DENSE_PARAMS_FILE: &str = "dense/params.json";

fn read_json<T: DeserializeOwned>(path: &Path) -> ServingResult<T> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ServingError::artifact_load(format!("failed to read {:?}: {}", path, e))
    })?;
    serde_json::from_str(&text)
        .map_err(|e| ServingError::artifact_load(format!("failed to parse {:?}: {}", path, e)))
}

/// The complete set of trained artifacts needed to serve predictions.
///
/// Immutable after load; the predictor borrows from it for the lifetime
/// of the process, so concurrent reads need no locking.
#[derive(Debug)]
pub struct ArtifactBundle {
    gender_encoder: LabelEncoder,
    geography_encoder: OneHotEncoder,
    scaler: StandardScaler,
    network: ChurnNetwork,
}

impl ArtifactBundle {
    /// Loads and cross-checks all artifacts from a directory.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::ArtifactLoad`] if any file is missing or
    /// unparsable, if an encoder or the scaler is internally
    /// inconsistent, or if the artifacts disagree on the feature vector
    /// width.
    pub fn load(dir: impl AsRef<Path>) -> ServingResult<Self> {
        let dir = dir.as_ref();
        info!("Loading artifacts from: {:?}", dir);

        if !dir.exists() {
            return Err(ServingError::artifact_load(format!(
                "artifact directory does not exist: {:?}",
                dir
            )));
        }

        let gender_encoder: LabelEncoder = read_json(&dir.join(GENDER_ENCODER_FILE))?;
        gender_encoder
            .validate()
            .map_err(|e| ServingError::artifact_load(e.to_string()))?;
        debug!("Gender classes: {:?}", gender_encoder.classes());

        let geography_encoder: OneHotEncoder = read_json(&dir.join(GEOGRAPHY_ENCODER_FILE))?;
        geography_encoder
            .validate()
            .map_err(|e| ServingError::artifact_load(e.to_string()))?;
        debug!("Geography categories: {:?}", geography_encoder.categories());

        let scaler: StandardScaler = read_json(&dir.join(SCALER_FILE))?;
        scaler
            .validate()
            .map_err(|e| ServingError::artifact_load(e.to_string()))?;

        let spec: NetworkSpec = read_json(&dir.join(MODEL_SPEC_FILE))?;
        let params: HashMap<String, Vec<f32>> = read_json(&dir.join(DENSE_PARAMS_FILE))?;
        let network = ChurnNetwork::from_params(&spec, &params, &Device::Cpu)
            .map_err(|e| ServingError::artifact_load(e.to_string()))?;

        let bundle = Self {
            gender_encoder,
            geography_encoder,
            scaler,
            network,
        };
        bundle.check_widths()?;

        info!(
            "Artifacts loaded: {} feature columns, network {:?}",
            bundle.feature_dim(),
            bundle.network.spec().hidden_dims
        );
        Ok(bundle)
    }

    // The assembled vector width is fixed by the geography category
    // count; the scaler and the network were fitted on that same
    // layout, so all three widths must agree.
    fn check_widths(&self) -> ServingResult<()> {
        let expected = self.feature_dim();
        if self.scaler.input_dim() != expected {
            return Err(ServingError::artifact_load(format!(
                "scaler expects {} columns but the encoders produce {}",
                self.scaler.input_dim(),
                expected
            )));
        }
        if self.network.input_dim() != expected {
            return Err(ServingError::artifact_load(format!(
                "network expects {} inputs but the encoders produce {}",
                self.network.input_dim(),
                expected
            )));
        }
        Ok(())
    }

    /// Width of the assembled feature vector.
    pub fn feature_dim(&self) -> usize {
        NUM_BASE_FEATURES + self.geography_encoder.num_categories()
    }

    /// Returns the gender encoder.
    pub fn gender_encoder(&self) -> &LabelEncoder {
        &self.gender_encoder
    }

    /// Returns the geography encoder.
    pub fn geography_encoder(&self) -> &OneHotEncoder {
        &self.geography_encoder
    }

    /// Returns the scaler.
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Returns the network spec.
    pub fn network_spec(&self) -> &NetworkSpec {
        self.network.spec()
    }

    /// Splits the bundle into the pieces the predictor injects.
    pub fn into_parts(self) -> (FeatureAssembler, StandardScaler, ChurnNetwork) {
        (
            FeatureAssembler::new(self.gender_encoder, self.geography_encoder),
            self.scaler,
            self.network,
        )
    }
}
