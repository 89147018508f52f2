//! File logging setup.
//!
//! The game owns the terminal, so records never go to stderr. Logging is
//! only switched on when a log file is configured.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter (`env_logger` syntax).
pub const LOG_FILTER_ENV: &str = "CROSSING_LOG";

pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    Builder::from_env(Env::new().filter_or(LOG_FILTER_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    Ok(())
}
