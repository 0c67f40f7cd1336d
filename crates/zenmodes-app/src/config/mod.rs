//! Configuration file parsing for zen-modes
//!
//! Supports `.zenmodes/config.toml` in the project directory. The modes file
//! it points at is handled by [`crate::modes_file`].

pub mod settings;
pub mod types;

pub use settings::{
    init_config_dir, load_settings, modes_file_path, save_settings, CONFIG_FILENAME, ZENMODES_DIR,
};
pub use types::*;
