//! Tracing setup.

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use elemsim_config::{ConfigLoader, LoggingConfig};

static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize tracing: console output on stderr, plus a daily rolling log
/// file when `logging.dir` is set.
///
/// `RUST_LOG` takes precedence over `logging.level`.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("Invalid log level: {}", logging.level))?;

    let file_layer = match logging.dir.as_deref() {
        Some(dir) => Some(file_layer(dir, logging.json)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(env_filter)
        // stdout carries command output
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();

    Ok(())
}

fn file_layer(dir: &str, json: bool) -> Result<Box<dyn Layer<Registry> + Send + Sync>> {
    let log_dir = PathBuf::from(ConfigLoader::expand_path(dir));
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("elemsim")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)
        .context("Failed to create rolling log file")?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = GUARD.set(guard);

    let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
    Ok(if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    })
}
