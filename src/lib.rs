// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod watch;

use std::path::{Path, PathBuf};

use tokio::sync::watch as watch_channel;
use tracing::info;

use crate::cli::{CliArgs, CliCommand};
use crate::engine::WatchEngine;
use crate::errors::Result;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading / default-config creation
/// - the watch engine
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = args
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_path);

    match args.command {
        CliCommand::Init { force } => {
            config::write_default_config(&config_path, force)?;
            println!("created {}", config_path.display());
            Ok(())
        }
        CliCommand::Watch => watch_command(&config_path).await,
    }
}

async fn watch_command(config_path: &Path) -> Result<()> {
    let cfg = config::load_and_normalize(config_path)?;
    let engine = WatchEngine::new(cfg)?;

    // Ctrl-C → broadcast shutdown to every watcher task.
    let (shutdown_tx, shutdown_rx) = watch_channel::channel(false);
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {err}");
            return;
        }
        info!("interrupt received, shutting down");
        let _ = shutdown_tx.send(true);
    });

    engine.run(shutdown_rx).await?;
    Ok(())
}
