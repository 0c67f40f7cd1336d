//! Configuration types for zen-modes
//!
//! Defines:
//! - `Settings` - Project settings (.zenmodes/config.toml)
//! - `StoreSettings`, `LoggingSettings` - Its sections

use serde::{Deserialize, Serialize};
use zenmodes_core::logging::DEFAULT_FILTER;

/// Project settings (.zenmodes/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where mode policies are persisted
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreSettings {
    /// Modes file, relative to the .zenmodes directory unless absolute
    #[serde(default = "default_modes_file")]
    pub modes_file: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            modes_file: default_modes_file(),
        }
    }
}

fn default_modes_file() -> String {
    "modes.toml".to_string()
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `tracing` filter directive; `ZENMODES_LOG` overrides it
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    DEFAULT_FILTER.to_string()
}
