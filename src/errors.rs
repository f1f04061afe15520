// src/errors.rs

//! Crate-wide error types.
//!
//! Startup errors (config missing / unparseable, init conflicts) are fatal
//! and bubble up to `main`, which prints one line and exits non-zero.
//! Per-cycle filesystem and command errors never reach this type; they are
//! logged inside the watch loop and the loop carries on.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotreloadError {
    #[error("missing expected config file: {0:?}")]
    MissingConfig(PathBuf),

    #[error("could not parse JSON config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("config file already exists, use --force to overwrite: {0:?}")]
    ConfigExists(PathBuf),

    #[error("config path is a directory: {0:?}")]
    ConfigPathIsDir(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HotreloadError>;
