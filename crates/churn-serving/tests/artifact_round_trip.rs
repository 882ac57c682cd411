//! End-to-end tests: write an artifact bundle to disk, load it, and
//! serve predictions through the full pipeline.

use std::path::Path;

use tempfile::tempdir;

use churn_core::{ChurnLabel, CustomerRecord};
use churn_features::{LabelEncoder, OneHotEncoder, StandardScaler};
use churn_serving::{ArtifactBundle, ChurnPredictor, ServingError};

/// Writes a consistent 12-column artifact set with a single-layer
/// network whose logit is `bias` for any input (zero weights).
fn write_test_artifacts(dir: &Path, bias: f32) {
    let gender = LabelEncoder::from_classes("gender", ["Female", "Male"]).unwrap();
    std::fs::write(
        dir.join("gender_encoder.json"),
        serde_json::to_string(&gender).unwrap(),
    )
    .unwrap();

    let geography =
        OneHotEncoder::from_categories("geography", ["France", "Germany", "Spain"]).unwrap();
    std::fs::write(
        dir.join("geography_encoder.json"),
        serde_json::to_string(&geography).unwrap(),
    )
    .unwrap();

    let scaler = StandardScaler::from_params(vec![0.0; 12], vec![1.0; 12]).unwrap();
    std::fs::write(
        dir.join("scaler.json"),
        serde_json::to_string(&scaler).unwrap(),
    )
    .unwrap();

    std::fs::write(
        dir.join("model_spec.json"),
        r#"{"input_dim": 12, "hidden_dims": [], "activation": "relu"}"#,
    )
    .unwrap();

    std::fs::create_dir_all(dir.join("dense")).unwrap();
    let params = serde_json::json!({
        "layers.0.weight": vec![0.0f32; 12],
        "layers.0.bias": [bias],
    });
    std::fs::write(dir.join("dense/params.json"), params.to_string()).unwrap();
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
fn test_load_and_predict_round_trip() {
    let dir = tempdir().unwrap();
    write_test_artifacts(dir.path(), 0.0);

    let bundle = ArtifactBundle::load(dir.path()).unwrap();
    assert_eq!(bundle.feature_dim(), 12);

    let predictor = ChurnPredictor::from_bundle(bundle);
    let result = predictor.predict(&sample_record()).unwrap();

    // Zero weights and zero bias: sigmoid(0) = 0.5, which classifies
    // as not-churn under the strict threshold.
    assert!((result.probability - 0.5).abs() < 1e-6);
    assert_eq!(result.label, ChurnLabel::NotLikelyToChurn);
}

#[test]
fn test_positive_logit_classifies_as_churn() {
    let dir = tempdir().unwrap();
    write_test_artifacts(dir.path(), 2.0);

    let predictor = ChurnPredictor::from_bundle(ArtifactBundle::load(dir.path()).unwrap());
    let result = predictor.predict(&sample_record()).unwrap();

    assert!(result.probability > 0.5 && result.probability <= 1.0);
    assert_eq!(result.label, ChurnLabel::LikelyToChurn);
}

#[test]
fn test_prediction_is_deterministic_across_loads() {
    let dir = tempdir().unwrap();
    write_test_artifacts(dir.path(), 0.7);

    let record = sample_record();
    let first = ChurnPredictor::from_bundle(ArtifactBundle::load(dir.path()).unwrap())
        .predict(&record)
        .unwrap();
    let second = ChurnPredictor::from_bundle(ArtifactBundle::load(dir.path()).unwrap())
        .predict(&record)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_every_known_category_pair_predicts() {
    let dir = tempdir().unwrap();
    write_test_artifacts(dir.path(), 0.3);

    let predictor = ChurnPredictor::from_bundle(ArtifactBundle::load(dir.path()).unwrap());
    for geography in ["France", "Germany", "Spain"] {
        for gender in ["Female", "Male"] {
            let record = CustomerRecord {
                gender: gender.to_string(),
                geography: geography.to_string(),
                ..sample_record()
            };
            let result = predictor.predict(&record).unwrap();
            assert!((0.0..=1.0).contains(&result.probability));
        }
    }
}

#[test]
fn test_missing_artifact_fails_load() {
    let dir = tempdir().unwrap();
    write_test_artifacts(dir.path(), 0.0);
    std::fs::remove_file(dir.path().join("scaler.json")).unwrap();

    let err = ArtifactBundle::load(dir.path()).unwrap_err();
    assert!(matches!(err, ServingError::ArtifactLoad(_)));
    assert!(err.is_artifact_error());
}

#[test]
fn test_corrupt_artifact_fails_load() {
    let dir = tempdir().unwrap();
    write_test_artifacts(dir.path(), 0.0);
    std::fs::write(dir.path().join("gender_encoder.json"), "not json").unwrap();

    let err = ArtifactBundle::load(dir.path()).unwrap_err();
    assert!(matches!(err, ServingError::ArtifactLoad(_)));
}

#[test]
fn test_width_disagreement_fails_load() {
    let dir = tempdir().unwrap();
    write_test_artifacts(dir.path(), 0.0);

    // A scaler fitted on 9 columns cannot serve the 12-column layout
    // the encoders produce.
    let scaler = StandardScaler::from_params(vec![0.0; 9], vec![1.0; 9]).unwrap();
    std::fs::write(
        dir.path().join("scaler.json"),
        serde_json::to_string(&scaler).unwrap(),
    )
    .unwrap();

    let err = ArtifactBundle::load(dir.path()).unwrap_err();
    assert!(matches!(err, ServingError::ArtifactLoad(_)));
}

#[test]
fn test_nonexistent_directory_fails_load() {
    let err = ArtifactBundle::load("/nonexistent/path/to/artifacts").unwrap_err();
    assert!(matches!(err, ServingError::ArtifactLoad(_)));
}
