// src/config/init.rs

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::model::WatchConfig;
use crate::errors::{HotreloadError, Result};

/// Write the default config file for `hotreload init`.
///
/// Fails if `path` already exists (unless `force` is set) or names a
/// directory.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            return Err(HotreloadError::ConfigPathIsDir(path.to_path_buf()));
        }
        Ok(_) if !force => {
            return Err(HotreloadError::ConfigExists(path.to_path_buf()));
        }
        _ => {}
    }

    let data = serde_json::to_string_pretty(&WatchConfig::default())?;
    fs::write(path, data)?;

    info!(path = ?path, "wrote default config");
    Ok(())
}
