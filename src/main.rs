//! Powerscore - rule-based quality scoring for power statements
//!
//! A fast, local-first scoring tool that evaluates persuasive value
//! propositions across four weighted dimensions and explains every point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = powerscore::cli::Cli::parse();
    powerscore::cli::run(cli)
}
