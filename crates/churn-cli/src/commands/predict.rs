//! Predict Command Implementation
//!
//! Runs a single prediction from command-line flags and prints the
//! probability with its binary label.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use churn_core::CustomerRecord;
use churn_serving::{ArtifactBundle, ChurnPredictor};

/// Run a single churn prediction from flags
///
/// Loads the artifact bundle, assembles the feature vector from the
/// supplied field values, and prints the churn probability. Exits
/// nonzero on any failure, including an unknown gender or geography.
///
/// # Example
///
/// ```bash
/// churn predict \
///     --artifacts ./artifacts \
///     --geography France \
///     --gender Female \
///     --age 40 \
///     --balance 60000
/// ```
#[derive(Args, Debug, Clone)]
pub struct PredictCommand {
    /// Directory containing the trained artifacts
    #[arg(long, short = 'a', env = "CHURN_ARTIFACTS_DIR")]
    pub artifacts: PathBuf,

    /// Geography label (must be a category the encoder was fitted on)
    #[arg(long)]
    pub geography: String,

    /// Gender label (must be a class the encoder was fitted on)
    #[arg(long)]
    pub gender: String,

    /// Age in years
    #[arg(long, default_value = "40")]
    pub age: i64,

    /// Account balance
    #[arg(long, default_value = "60000.0")]
    pub balance: f32,

    /// Credit score
    #[arg(long, default_value = "600")]
    pub credit_score: i64,

    /// Estimated yearly salary
    #[arg(long, default_value = "50000.0")]
    pub estimated_salary: f32,

    /// Years with the bank
    #[arg(long, default_value = "3")]
    pub tenure: i64,

    /// Number of bank products held
    #[arg(long, default_value = "2")]
    pub num_of_products: i64,

    /// Whether the customer holds a credit card (0/1)
    #[arg(long, default_value = "1")]
    pub has_cr_card: i64,

    /// Whether the customer is an active member (0/1)
    #[arg(long, default_value = "1")]
    pub is_active_member: i64,
}

impl PredictCommand {
    /// Execute the predict command
    pub fn run(&self) -> Result<()> {
        let bundle =
            ArtifactBundle::load(&self.artifacts).context("Failed to load artifact bundle")?;
        let predictor = ChurnPredictor::from_bundle(bundle);

        let record = self.to_record();
        info!("Scoring record: {:?}", record);

        let result = predictor
            .predict(&record)
            .context("Prediction failed")?;

        println!(
            "The customer is {}. Probability: {:.2}",
            result.label.describe(),
            result.probability
        );
        Ok(())
    }

    fn to_record(&self) -> CustomerRecord {
        CustomerRecord {
            credit_score: self.credit_score,
            gender: self.gender.clone(),
            age: self.age,
            tenure: self.tenure,
            balance: self.balance,
            num_of_products: self.num_of_products,
            has_cr_card: self.has_cr_card,
            is_active_member: self.is_active_member,
            estimated_salary: self.estimated_salary,
            geography: self.geography.clone(),
        }
    }
}
