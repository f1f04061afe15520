// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{WatchConfig, CONFIG_FILE_NAME};
use crate::errors::{HotreloadError, Result};

/// Load a configuration file from a given path and return the raw
/// `WatchConfig`.
///
/// This only performs JSON deserialization; defaults are **not** applied.
/// Use [`load_and_normalize`] for the ready-to-run form.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<WatchConfig> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(HotreloadError::MissingConfig(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let config: WatchConfig = serde_json::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file and apply the documented defaults.
///
/// This is the entry point used by `hotreload watch`:
///
/// - Reads JSON (unknown fields are ignored).
/// - Empty `WatchFileTypes` becomes `["*"]`, empty `IncludePaths` becomes
///   `["."]`, empty `Commands` becomes the default echo command.
/// - `Delay` is floored to the minimum.
pub fn load_and_normalize(path: impl AsRef<Path>) -> Result<WatchConfig> {
    Ok(load_from_path(path)?.normalized())
}

/// Resolve the default config path: `config.hotreload.json` in the current
/// working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}
