// src/watch/watcher.rs

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::CommandSpec;
use crate::exec;
use crate::watch::scanner::{self, TypeFilter};
use crate::watch::snapshot::{ChangeRecord, ChangeSet, ChangeStatus, PathSnapshot};

/// Polls a single include path for changes.
///
/// Each watcher owns its [`PathSnapshot`] outright; the engine spawns one
/// watcher task per configured include path and no snapshot is ever shared
/// between tasks.
pub struct PathWatcher {
    root: PathBuf,
    filter: TypeFilter,
    excludes: Arc<HashSet<PathBuf>>,
    snapshot: PathSnapshot,
    /// Whether the root could be stat'ed last cycle; drives one-shot
    /// unreachable logging instead of a warning every cycle.
    root_reachable: bool,
}

impl PathWatcher {
    /// `root` must be absolute; `excludes` must already be normalized to
    /// absolute paths.
    pub fn new(root: PathBuf, filter: TypeFilter, excludes: Arc<HashSet<PathBuf>>) -> Self {
        Self {
            root,
            filter,
            excludes,
            snapshot: PathSnapshot::new(),
            root_reachable: true,
        }
    }

    /// Run the polling loop until `shutdown` flips to `true`.
    ///
    /// Each cycle scans, diffs against the snapshot, dispatches commands
    /// for a non-empty change set, then sleeps for `delay`. The shutdown
    /// signal is checked at the top of every cycle and interrupts the
    /// sleep, so the loop exits promptly.
    pub async fn run(
        mut self,
        commands: Arc<Vec<CommandSpec>>,
        delay: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) {
        info!(root = ?self.root, "watching path");

        loop {
            if *shutdown.borrow() {
                break;
            }

            let changes = self.poll_cycle();
            if !changes.is_empty() {
                debug!(root = ?self.root, count = changes.len(), "changes detected");
                exec::dispatch(&changes, &commands).await;
            }

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                res = shutdown.changed() => {
                    // A closed channel means the supervisor is gone; no
                    // shutdown signal can ever arrive.
                    if res.is_err() {
                        break;
                    }
                }
            }
        }

        info!(root = ?self.root, "watcher stopped");
    }

    /// One polling cycle: stat the root, scan, diff against the snapshot.
    ///
    /// Public so the cycle semantics can be driven in tests without timers.
    pub fn poll_cycle(&mut self) -> ChangeSet {
        let mut changes = ChangeSet::new();

        let root_meta = match fs::metadata(&self.root) {
            Ok(meta) => meta,
            Err(err) => {
                // Transient: emit nothing, keep the snapshot, retry next
                // cycle.
                if self.root_reachable {
                    warn!(root = ?self.root, error = %err, "watch root unreachable, retrying");
                }
                self.root_reachable = false;
                return changes;
            }
        };
        self.root_reachable = true;

        // A change to the root's own timestamp is signal enough; granular
        // diffing of children resumes once the root settles.
        if let Ok(mtime) = root_meta.modified() {
            if let Some(status) = self.snapshot.observe(&self.root, mtime) {
                changes.push(ChangeRecord {
                    path: self.root.clone(),
                    status,
                });
                return changes;
            }
        }

        let mut seen: HashSet<PathBuf> = HashSet::new();
        seen.insert(self.root.clone());

        for path in scanner::scan(&self.root, &self.filter, &self.excludes) {
            seen.insert(path.clone());

            let mtime = match fs::metadata(&path).and_then(|meta| meta.modified()) {
                Ok(mtime) => mtime,
                Err(_) => {
                    // Deleted between the scan and the stat.
                    if self.snapshot.contains(&path) {
                        self.snapshot.forget(&path);
                        changes.push(ChangeRecord {
                            path,
                            status: ChangeStatus::Deleted,
                        });
                    }
                    continue;
                }
            };

            if let Some(status) = self.snapshot.observe(&path, mtime) {
                changes.push(ChangeRecord { path, status });
            }
        }

        for path in self.snapshot.drain_unseen(&seen, &self.root) {
            changes.push(ChangeRecord {
                path,
                status: ChangeStatus::Deleted,
            });
        }

        changes
    }
}
