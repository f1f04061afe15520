// src/engine/runtime.rs

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::{CommandSpec, WatchConfig};
use crate::watch::{PathWatcher, TypeFilter};

/// Supervises one polling task per configured include path.
///
/// Construction performs the one-time normalization of the config's paths:
/// include roots and exclude entries are resolved to absolute form against
/// the working directory *before* any task is spawned, and the results are
/// shared read-only. The tasks themselves never touch the raw config
/// again.
pub struct WatchEngine {
    roots: Vec<PathBuf>,
    filter: TypeFilter,
    excludes: Arc<HashSet<PathBuf>>,
    commands: Arc<Vec<CommandSpec>>,
    delay: Duration,
}

impl WatchEngine {
    /// Build an engine from a normalized [`WatchConfig`].
    pub fn new(config: WatchConfig) -> Result<Self> {
        let cwd = env::current_dir().context("resolving current working directory")?;

        let excludes: HashSet<PathBuf> = config
            .exclude_paths
            .iter()
            .map(|path| absolutize(&cwd, path))
            .collect();

        // Empty include entries are skipped rather than treated as cwd.
        let roots: Vec<PathBuf> = config
            .include_paths
            .iter()
            .filter(|path| !path.is_empty())
            .map(|path| absolutize(&cwd, path))
            .collect();

        Ok(Self {
            roots,
            filter: TypeFilter::from_types(&config.watch_file_types),
            excludes: Arc::new(excludes),
            commands: Arc::new(config.commands),
            delay: Duration::from_millis(config.delay_ms),
        })
    }

    /// Spawn all watcher tasks and wait until every one of them has exited.
    ///
    /// Tasks exit when `shutdown` flips to `true` (broadcast by the caller,
    /// typically on Ctrl-C). A panicked task is logged and does not tear
    /// down its siblings.
    pub async fn run(self, shutdown: watch::Receiver<bool>) -> Result<()> {
        if self.roots.is_empty() {
            warn!("no include paths to watch");
            return Ok(());
        }

        let mut handles = Vec::with_capacity(self.roots.len());
        for root in self.roots {
            let watcher = PathWatcher::new(root, self.filter.clone(), Arc::clone(&self.excludes));
            handles.push(tokio::spawn(watcher.run(
                Arc::clone(&self.commands),
                self.delay,
                shutdown.clone(),
            )));
        }

        info!(watchers = handles.len(), "watch engine started");

        for handle in handles {
            if let Err(err) = handle.await {
                warn!(error = %err, "watcher task aborted");
            }
        }

        info!("watch engine stopped");
        Ok(())
    }
}

/// Resolve `path` against `cwd` unless it is already absolute.
fn absolutize(cwd: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
