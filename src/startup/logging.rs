//! Log output.
//!
//! The terminal belongs to the UI, so tracing output goes to a file.

use crate::startup::AppConfig;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use super::config::DEFAULT_LOG_FILTER;

/// Install the global tracing subscriber.
///
/// Does nothing when no log location can be determined. Fails if the log
/// file cannot be opened or a subscriber is already installed.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_path() else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("installing log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "Logging initialized");
    Ok(())
}
