//! CLI definitions for elemsim.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// elemsim CLI.
#[derive(Parser)]
#[command(name = "elemsim")]
#[command(about = "Find elements that look like an anchor element in a DOM snapshot")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults are used if it does not exist)
    #[arg(short, long, default_value = "elemsim.toml", global = true, env = "ELEMSIM_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Selects the anchor element in a snapshot.
#[derive(Args)]
pub(crate) struct AnchorArgs {
    /// Snapshot JSON file (CDP `DOM.getDocument` result)
    pub snapshot: PathBuf,

    /// Tag name of the anchor element
    #[arg(short, long)]
    pub tag: String,

    /// Zero-based index of the anchor among elements with that tag
    #[arg(short, long, default_value_t = 0)]
    pub nth: usize,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Score every element sharing the anchor's tag name
    Match {
        #[command(flatten)]
        anchor: AnchorArgs,

        /// Report matches scoring strictly above this (overrides config)
        #[arg(long)]
        threshold: Option<f64>,

        /// Report every candidate, ignoring the threshold
        #[arg(long)]
        all: bool,

        /// Sort by descending score instead of document order
        #[arg(long)]
        ranked: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the anchor's feature vector as JSON
    Features {
        #[command(flatten)]
        anchor: AnchorArgs,
    },

    /// Break down the similarity between the anchor and another element
    Explain {
        #[command(flatten)]
        anchor: AnchorArgs,

        /// Zero-based index of the other element among elements with the same tag
        #[arg(long)]
        other: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}
