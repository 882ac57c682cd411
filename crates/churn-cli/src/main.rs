//! Churn CLI - terminal surface for customer churn prediction.
//!
//! Loads the trained artifact bundle and serves predictions through an
//! interactive form, one-shot flags, or an artifact inspection report.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use churn_cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("churn=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Form(cmd) => cmd.run()?,
        Commands::Predict(cmd) => cmd.run()?,
        Commands::Inspect(cmd) => cmd.run()?,
    }

    Ok(())
}
