//! Settings parser for .zenmodes/config.toml

use super::types::Settings;
use std::path::{Path, PathBuf};
use zenmodes_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const ZENMODES_DIR: &str = ".zenmodes";

/// Load settings from .zenmodes/config.toml
///
/// A missing file gives the defaults. An unreadable or invalid file is a
/// [`Error::Config`]; callers usually report it and carry on with
/// `Settings::default()`.
pub fn load_settings(project_path: &Path) -> Result<Settings> {
    let config_path = project_path.join(ZENMODES_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config(format!("Failed to read {}: {}", config_path.display(), e))
    })?;
    let settings: Settings = toml::from_str(&content).map_err(|e| {
        Error::config(format!("Failed to parse {}: {}", config_path.display(), e))
    })?;

    debug!("Loaded settings from {:?}", config_path);
    Ok(settings)
}

/// Resolve the modes file path configured in `settings`
pub fn modes_file_path(project_path: &Path, settings: &Settings) -> PathBuf {
    let configured = Path::new(&settings.store.modes_file);
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        project_path.join(ZENMODES_DIR).join(configured)
    }
}

/// Create .zenmodes/ with a default config.toml
///
/// Existing files are left alone.
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let zen_dir = project_path.join(ZENMODES_DIR);

    if !zen_dir.exists() {
        std::fs::create_dir_all(&zen_dir)
            .map_err(|e| Error::config(format!("Failed to create .zenmodes dir: {}", e)))?;
        info!("Created .zenmodes directory");
    }

    let config_path = zen_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        save_settings(project_path, &Settings::default())?;
    }

    Ok(())
}

/// Save settings to .zenmodes/config.toml
///
/// Writes to a temp file first, then renames over the old file.
pub fn save_settings(project_path: &Path, settings: &Settings) -> Result<()> {
    let zen_dir = project_path.join(ZENMODES_DIR);

    if !zen_dir.exists() {
        std::fs::create_dir_all(&zen_dir)
            .map_err(|e| Error::config(format!("Failed to create .zenmodes dir: {}", e)))?;
    }

    let config_path = zen_dir.join(CONFIG_FILENAME);
    let temp_path = zen_dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

fn generate_config_header() -> String {
    r#"# zen-modes configuration
# modes_file is relative to this directory unless absolute.
# ZENMODES_LOG overrides logging.filter.

"#
    .to_string()
}
