//! The churn prediction engine.

use std::sync::Arc;

use tracing::debug;

use churn_core::{CustomerRecord, PredictionResult};
use churn_features::{FeatureAssembler, StandardScaler};
use churn_model::Scorer;

use crate::artifacts::ArtifactBundle;
use crate::error::ServingResult;

/// Single-shot churn predictor: assemble, scale, score, classify.
///
/// The predictor is a pure function of its injected collaborators; it
/// holds no mutable state and performs no I/O, so one instance can
/// serve any number of sequential (or, with a `Sync` scorer, concurrent)
/// requests. All failures are deterministic for a given input and are
/// surfaced to the caller, never retried.
///
/// # Example
///
/// ```no_run
/// use churn_serving::{ArtifactBundle, ChurnPredictor};
///
/// # fn example(record: &churn_core::CustomerRecord) -> Result<(), churn_serving::ServingError> {
/// let bundle = ArtifactBundle::load("artifacts")?;
/// let predictor = ChurnPredictor::from_bundle(bundle);
/// let result = predictor.predict(record)?;
/// println!("p(churn) = {:.2}", result.probability);
/// # Ok(())
/// # }
/// ```
pub struct ChurnPredictor {
    assembler: FeatureAssembler,
    scaler: StandardScaler,
    scorer: Arc<dyn Scorer>,
}

impl std::fmt::Debug for ChurnPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChurnPredictor")
            .field("input_dim", &self.assembler.output_dim())
            .finish()
    }
}

impl ChurnPredictor {
    /// Creates a predictor from explicitly injected collaborators.
    pub fn new(
        assembler: FeatureAssembler,
        scaler: StandardScaler,
        scorer: Arc<dyn Scorer>,
    ) -> Self {
        Self {
            assembler,
            scaler,
            scorer,
        }
    }

    /// Creates a predictor from a loaded artifact bundle.
    pub fn from_bundle(bundle: ArtifactBundle) -> Self {
        let (assembler, scaler, network) = bundle.into_parts();
        Self::new(assembler, scaler, Arc::new(network))
    }

    /// Runs one prediction.
    ///
    /// # Errors
    ///
    /// Returns an encoding error for an unknown gender or geography, a
    /// dimension mismatch if the assembled vector disagrees with the
    /// scaler's fitted width, or a scoring error if the network fails
    /// or produces a malformed output.
    pub fn predict(&self, record: &CustomerRecord) -> ServingResult<PredictionResult> {
        let features = self.assembler.assemble(record)?;
        debug!("Assembled {} feature columns", features.len());

        let scaled = self.scaler.transform(&features)?;
        let probability = self.scorer.score(&scaled)?;
        debug!("Scored probability: {:.6}", probability);

        Ok(PredictionResult::from_probability(probability))
    }

    /// Returns the feature assembler.
    pub fn assembler(&self) -> &FeatureAssembler {
        &self.assembler
    }

    /// Width of the feature vector this predictor assembles.
    pub fn input_dim(&self) -> usize {
        self.assembler.output_dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use churn_core::ChurnLabel;
    use churn_features::{FeatureError, LabelEncoder, OneHotEncoder};
    use churn_model::{ModelError, ModelResult};

    use crate::error::ServingError;

    /// Scorer stand-in returning a fixed probability.
    struct FixedScorer {
        input_dim: usize,
        probability: f32,
    }

    impl Scorer for FixedScorer {
        fn input_dim(&self) -> usize {
            self.input_dim
        }

        fn score(&self, features: &[f32]) -> ModelResult<f32> {
            if features.len() != self.input_dim {
                return Err(ModelError::scoring("wrong width"));
            }
            Ok(self.probability)
        }
    }

    fn test_predictor(probability: f32) -> ChurnPredictor {
        let assembler = FeatureAssembler::new(
            LabelEncoder::from_classes("gender", ["Female", "Male"]).unwrap(),
            OneHotEncoder::from_categories("geography", ["France", "Germany", "Spain"]).unwrap(),
        );
        let scaler = StandardScaler::from_params(vec![0.0; 12], vec![1.0; 12]).unwrap();
        let scorer = Arc::new(FixedScorer {
            input_dim: 12,
            probability,
        });
        ChurnPredictor::new(assembler, scaler, scorer)
    }

    fn sample_record() -> CustomerRecord {
        CustomerRecord {
            credit_score: 600,
            gender: "Female".to_string(),
            age: 40,
            tenure: 3,
            balance: 60_000.0,
            num_of_products: 2,
            has_cr_card: 1,
            is_active_member: 1,
            estimated_salary: 50_000.0,
            geography: "France".to_string(),
        }
    }

    #[test]
    fn test_predict_with_mock_scorer() {
        let predictor = test_predictor(0.9);
        let result = predictor.predict(&sample_record()).unwrap();
        assert!((result.probability - 0.9).abs() < 1e-6);
        assert_eq!(result.label, ChurnLabel::LikelyToChurn);
    }

    #[test]
    fn test_tie_probability_is_not_churn() {
        let predictor = test_predictor(0.5);
        let result = predictor.predict(&sample_record()).unwrap();
        assert_eq!(result.label, ChurnLabel::NotLikelyToChurn);
    }

    #[test]
    fn test_unknown_geography_is_client_error() {
        let predictor = test_predictor(0.5);
        let record = CustomerRecord {
            geography: "Atlantis".to_string(),
            ..sample_record()
        };
        let err = predictor.predict(&record).unwrap_err();
        assert!(err.is_client_error());
        assert!(matches!(
            err,
            ServingError::Feature(FeatureError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_scaler_width_mismatch_surfaces() {
        // A scaler fitted on a different layout fails the request with
        // a dimension mismatch, the pipeline's primary integrity check.
        let assembler = FeatureAssembler::new(
            LabelEncoder::from_classes("gender", ["Female", "Male"]).unwrap(),
            OneHotEncoder::from_categories("geography", ["France", "Germany", "Spain"]).unwrap(),
        );
        let scaler = StandardScaler::from_params(vec![0.0; 9], vec![1.0; 9]).unwrap();
        let scorer = Arc::new(FixedScorer {
            input_dim: 9,
            probability: 0.5,
        });
        let predictor = ChurnPredictor::new(assembler, scaler, scorer);

        let err = predictor.predict(&sample_record()).unwrap_err();
        assert!(matches!(
            err,
            ServingError::Feature(FeatureError::DimensionMismatch {
                expected: 9,
                actual: 12
            })
        ));
    }

    #[test]
    fn test_predict_is_deterministic() {
        let predictor = test_predictor(0.42);
        let record = sample_record();
        let first = predictor.predict(&record).unwrap();
        let second = predictor.predict(&record).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_dim_reports_assembled_width() {
        let predictor = test_predictor(0.5);
        assert_eq!(predictor.input_dim(), 12);
    }
}
