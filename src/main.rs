//! elemsim - structural element matching
//!
//! Main entry point for the elemsim CLI.

mod cli;
mod commands;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use elemsim_config::{ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands};
use crate::commands::{run_explain, run_features, run_match};
use crate::logging::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;
    init_tracing(&config.logging)?;
    debug!(config = %cli.config.display(), "Configuration loaded");

    for warning in ConfigValidator::validate(&config).into_result()? {
        warn!(path = %warning.path, "{}", warning.message);
    }

    match cli.command {
        Commands::Match {
            anchor,
            threshold,
            all,
            ranked,
            format,
        } => run_match(&config, &anchor, threshold, all, ranked, format),
        Commands::Features { anchor } => run_features(&config, &anchor),
        Commands::Explain {
            anchor,
            other,
            format,
        } => run_explain(&config, &anchor, other, format),
    }
}
