//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "ZENMODES_LOG";

/// Filter used when neither the environment nor the config sets one
pub const DEFAULT_FILTER: &str = "zen_modes=info,zenmodes_app=info,zenmodes_core=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/zen-modes/logs/`.
/// `ZENMODES_LOG` takes precedence over `filter`.
///
/// # Examples
/// ```bash
/// ZENMODES_LOG=debug zenmodes show bedtime messages
/// ZENMODES_LOG=zenmodes_core=trace zenmodes click bedtime messages important
/// ```
pub fn init(filter: &str) -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "zenmodes.log");

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::logging_init(e.to_string()))?;

    tracing::info!("zen-modes starting, log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("zen-modes").join("logs")
}
