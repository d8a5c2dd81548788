//! Command-line entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use zen_extract_tps::config::ExtractConfig;
use zen_extract_tps::pipeline;

/// Package the numbered tp branches of a training repository into a single
/// zip bundle.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Training name; the repository cloned is formation-<trainingName>
    training_name: String,

    /// Destination archive path (default: <trainingName>-tps.zip in the
    /// current directory)
    destination: Option<PathBuf>,

    /// Comma-separated extra branch names to package in addition to the
    /// discovered tp branches
    #[arg(short = 'b', long = "additional-branch", value_delimiter = ',')]
    additional_branches: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ExtractConfig::new(
        args.training_name,
        args.destination,
        args.additional_branches,
    )
    .context("failed to resolve run configuration")?;

    if let Err(err) = pipeline::run(&config) {
        error!(error = %err, "extraction failed");
        std::process::exit(1);
    }

    Ok(())
}
