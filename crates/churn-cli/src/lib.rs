//! Churn CLI Library
//!
//! This crate provides the command-line surface for the churn
//! predictor:
//!
//! - **Form**: interactive terminal form, one prediction per submission
//! - **Predict**: one-shot prediction from command-line flags
//! - **Inspect**: summary of a loaded artifact bundle
//!
//! # Example
//!
//! ```bash
//! # Interactive form
//! churn form --artifacts ./artifacts
//!
//! # One-shot prediction
//! churn predict --artifacts ./artifacts --geography France --gender Female --age 40
//!
//! # Inspect the artifact bundle
//! churn inspect --artifacts ./artifacts
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{FormCommand, InspectCommand, PredictCommand};

/// Churn - customer churn prediction over a trained network
///
/// Collects bank-customer attributes, runs them through the trained
/// artifacts, and reports a churn probability with a binary label.
#[derive(Parser, Debug)]
#[command(name = "churn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive prediction form
    Form(FormCommand),

    /// Run a single prediction from flags
    Predict(PredictCommand),

    /// Print a summary of the artifact bundle
    Inspect(InspectCommand),
}

/// Result type alias for CLI operations
pub type CliResult<T> = anyhow::Result<T>;
