// src/core/paths.rs

use crate::constants::{CONFIG_DIR_NAME, SETTINGS_FILENAME};
use std::path::PathBuf;
use thiserror::Error;

/// Failures locating the settings directory.
#[derive(Error, Debug)]
pub enum PathError {
    /// The platform has no config directory (for example `$HOME` is unset).
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
}

/// Returns the path to the carconf configuration directory (`~/.config/carconf`).
/// The directory is not created; a missing directory simply means default settings.
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or(PathError::ConfigDirNotFound)
}

/// Returns the path to the default `carconf.toml`.
pub fn get_settings_path() -> Result<PathBuf, PathError> {
    get_config_dir().map(|dir| dir.join(SETTINGS_FILENAME))
}
