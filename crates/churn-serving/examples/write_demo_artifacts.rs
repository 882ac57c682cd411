//! Writes a demo artifact bundle and runs one prediction against it.
//!
//! The bundle matches the production layout (two encoders, a scaler,
//! and a network spec with dense parameters) but uses small
//! hand-picked weights, so the binary surface can be exercised without
//! a real training run:
//!
//! ```bash
//! cargo run -p churn-serving --example write_demo_artifacts -- demo_artifacts
//! cargo run -p churn-cli --bin churn -- form --artifacts demo_artifacts
//! ```

use std::path::{Path, PathBuf};

use churn_core::CustomerRecord;
use churn_features::{LabelEncoder, OneHotEncoder, StandardScaler};
use churn_serving::{ArtifactBundle, ChurnPredictor, ServingResult};

const FEATURE_DIM: usize = 12;
const HIDDEN_DIM: usize = 8;

fn write_demo_bundle(dir: &Path) -> ServingResult<()> {
    std::fs::create_dir_all(dir)?;

    let gender = LabelEncoder::from_classes("gender", ["Female", "Male"])?;
    std::fs::write(
        dir.join("gender_encoder.json"),
        serde_json::to_string_pretty(&gender).expect("encoder serializes"),
    )?;

    let geography = OneHotEncoder::from_categories("geography", ["France", "Germany", "Spain"])?;
    std::fs::write(
        dir.join("geography_encoder.json"),
        serde_json::to_string_pretty(&geography).expect("encoder serializes"),
    )?;

    // Plausible standardization statistics for the 12-column layout:
    // [credit_score, gender, age, tenure, balance, num_of_products,
    //  has_cr_card, is_active_member, estimated_salary, geo x3]
    let mean = vec![
        650.0, 0.5, 39.0, 5.0, 76_000.0, 1.5, 0.7, 0.5, 100_000.0, 0.5, 0.25, 0.25,
    ];
    let scale = vec![
        97.0, 0.5, 10.5, 2.9, 62_000.0, 0.58, 0.46, 0.5, 57_000.0, 0.5, 0.43, 0.43,
    ];
    let scaler = StandardScaler::from_params(mean, scale)?;
    std::fs::write(
        dir.join("scaler.json"),
        serde_json::to_string_pretty(&scaler).expect("scaler serializes"),
    )?;

    std::fs::write(
        dir.join("model_spec.json"),
        format!(
            r#"{{"input_dim": {FEATURE_DIM}, "hidden_dims": [{HIDDEN_DIM}], "activation": "relu"}}"#
        ),
    )?;

    // Deterministic small weights; no training behind them, just a
    // network that produces varied probabilities across inputs.
    let mut hidden_weight = Vec::with_capacity(HIDDEN_DIM * FEATURE_DIM);
    for i in 0..HIDDEN_DIM * FEATURE_DIM {
        let x = (i as f32 * 0.37).sin() * 0.4;
        hidden_weight.push(x);
    }
    let hidden_bias: Vec<f32> = (0..HIDDEN_DIM).map(|i| (i as f32 * 0.11).cos() * 0.1).collect();
    let head_weight: Vec<f32> = (0..HIDDEN_DIM).map(|i| (i as f32 * 0.53).sin() * 0.5).collect();
    let head_bias = vec![-0.2f32];

    std::fs::create_dir_all(dir.join("dense"))?;
    let params = serde_json::json!({
        "layers.0.weight": hidden_weight,
        "layers.0.bias": hidden_bias,
        "layers.1.weight": head_weight,
        "layers.1.bias": head_bias,
    });
    std::fs::write(dir.join("dense/params.json"), params.to_string())?;

    Ok(())
}

fn main() -> ServingResult<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demo_artifacts"));

    write_demo_bundle(&dir)?;
    println!("Wrote demo artifacts to {:?}", dir);

    // Sanity: load the bundle back and score one record.
    let predictor = ChurnPredictor::from_bundle(ArtifactBundle::load(&dir)?);
    let record = CustomerRecord {
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
    };
    let result = predictor.predict(&record)?;
    println!(
        "Sample prediction: {} (probability {:.4})",
        result.label.describe(),
        result.probability
    );

    Ok(())
}
