//! Inspect Command Implementation
//!
//! Prints a summary of a loaded artifact bundle: category lists, the
//! feature column layout, and the network shape.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use churn_features::FeatureAssembler;
use churn_serving::ArtifactBundle;

/// Print a summary of the artifact bundle
///
/// Loads and cross-checks the artifacts, then reports what the bundle
/// serves: encoder categories, the assembled column order, and the
/// network architecture.
///
/// # Example
///
/// ```bash
/// churn inspect --artifacts ./artifacts
/// ```
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Directory containing the trained artifacts
    #[arg(long, short = 'a', env = "CHURN_ARTIFACTS_DIR")]
    pub artifacts: PathBuf,
}

impl InspectCommand {
    /// Execute the inspect command
    pub fn run(&self) -> Result<()> {
        let bundle =
            ArtifactBundle::load(&self.artifacts).context("Failed to load artifact bundle")?;

        println!("Artifact bundle: {:?}", self.artifacts);
        println!();
        println!("Gender classes:      {:?}", bundle.gender_encoder().classes());
        println!(
            "Geography categories: {:?}",
            bundle.geography_encoder().categories()
        );
        println!();

        let spec = bundle.network_spec();
        println!("Network:");
        println!("  input_dim:   {}", spec.input_dim);
        println!("  hidden_dims: {:?}", spec.hidden_dims);
        println!("  activation:  {:?}", spec.activation);
        println!();

        let assembler = FeatureAssembler::new(
            bundle.gender_encoder().clone(),
            bundle.geography_encoder().clone(),
        );
        println!("Feature columns ({}):", assembler.output_dim());
        for (i, name) in assembler.column_names().iter().enumerate() {
            println!("  [{i:2}] {name}");
        }

        Ok(())
    }
}
