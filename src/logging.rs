//! Logging setup: console output plus a daily-rolling file in the platform
//! data directory. Set `RUST_LOG` to adjust verbosity.

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Log directory under the platform data dir, created on demand.
///
/// Linux: `~/.local/share/collostruct/logs`
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;

    let log_dir = base_dir.join("collostruct").join("logs");
    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

/// Initialize the tracing subscriber. Call once at startup.
pub fn init() -> Result<()> {
    let log_dir = get_log_dir()?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "collostruct.log");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer().with_ansi(false).with_writer(file_appender);
    let console_layer = fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::debug!(dir = %log_dir.display(), "logging initialized");
    Ok(())
}
