// src/config/mod.rs

//! Configuration loading for hotreload.
//!
//! Responsibilities:
//! - Define the JSON-backed data model (`model.rs`).
//! - Load a config file from disk and fill defaults (`loader.rs`).
//! - Write the default config file for `hotreload init` (`init.rs`).

pub mod init;
pub mod loader;
pub mod model;

pub use init::write_default_config;
pub use loader::{default_config_path, load_and_normalize, load_from_path};
pub use model::{CommandSpec, WatchConfig, CONFIG_FILE_NAME, MIN_DELAY_MS};
