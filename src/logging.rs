//! File logging for the game.
//!
//! The terminal belongs to the TUI while the game runs, so log lines go to a file
//! instead of stdout or stderr.

use anyhow::{Context, Result};
use std::{fs::File, path::Path, sync::Mutex};
use tracing_subscriber::EnvFilter;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "game.log";

/// Install a global subscriber writing to `path`.
///
/// The filter is read from `RUST_LOG` and falls back to `info`.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {:?}", parent))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create log file: {:?}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(())
}
