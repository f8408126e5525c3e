//! Log setup
//!
//! The terminal belongs to the game while it runs, so log lines go to a
//! file. Without a log file no subscriber is installed and the `tracing`
//! macros are no-ops.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Install a global subscriber that appends to `path` at `level` and above
pub fn init(path: &Path, level: Level) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install log subscriber")?;

    tracing::info!(log_file = %path.display(), %level, "logging started");
    Ok(())
}
