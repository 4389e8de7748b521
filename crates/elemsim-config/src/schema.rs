//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use elemsim_protocols::{ExtractOptions, Weights};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Per-field scoring weights. Fields left out keep their defaults.
    #[serde(default)]
    pub weights: Weights,

    #[serde(default)]
    pub extractor: ExtractOptions,

    #[serde(default)]
    pub matcher: MatcherConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Matches must score strictly above this to be reported.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

fn default_threshold() -> f64 {
    0.9
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for daily rolling log files. Console only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Write the file log as JSON lines.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
