// src/watch/snapshot.rs

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;

/// How a path changed relative to the previous polling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeStatus {
    Created,
    Modified,
    Deleted,
}

/// One observed change, in the shape handed to the command templates:
/// `{"Path": "...", "Status": "Created"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    #[serde(rename = "Path")]
    pub path: PathBuf,

    #[serde(rename = "Status")]
    pub status: ChangeStatus,
}

/// The changes produced by one polling cycle. Empty sets are never
/// dispatched.
pub type ChangeSet = Vec<ChangeRecord>;

/// Last-observed modification times for every path under one watch root.
///
/// Exclusively owned by the polling loop for that root; never shared
/// between tasks. All keys are absolute paths.
#[derive(Debug, Default)]
pub struct PathSnapshot {
    modified: HashMap<PathBuf, SystemTime>,
}

impl PathSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mtime` for `path` and classify the observation: `Created`
    /// for an unseen path, `Modified` when the stored time is older, `None`
    /// when nothing changed.
    pub fn observe(&mut self, path: &Path, mtime: SystemTime) -> Option<ChangeStatus> {
        match self.modified.get(path) {
            None => {
                self.modified.insert(path.to_path_buf(), mtime);
                Some(ChangeStatus::Created)
            }
            Some(prev) if *prev < mtime => {
                self.modified.insert(path.to_path_buf(), mtime);
                Some(ChangeStatus::Modified)
            }
            Some(_) => None,
        }
    }

    /// Whether `path` was present in a previous cycle.
    pub fn contains(&self, path: &Path) -> bool {
        self.modified.contains_key(path)
    }

    /// Drop `path` from the snapshot. A path forgotten here is reported
    /// `Created`, never `Modified`, if it reappears later.
    pub fn forget(&mut self, path: &Path) {
        self.modified.remove(path);
    }

    /// Remove and return every tracked path that was not seen this cycle,
    /// excluding the root entry itself. This catches files deleted between
    /// polls, renamed away, or no longer matching the extension filter.
    ///
    /// The result is sorted so deletion records are emitted in a stable
    /// order.
    pub fn drain_unseen(&mut self, seen: &HashSet<PathBuf>, root: &Path) -> Vec<PathBuf> {
        let mut stale: Vec<PathBuf> = self
            .modified
            .keys()
            .filter(|path| path.as_path() != root && !seen.contains(path.as_path()))
            .cloned()
            .collect();
        stale.sort();

        for path in &stale {
            self.modified.remove(path);
        }

        stale
    }

    pub fn len(&self) -> usize {
        self.modified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modified.is_empty()
    }
}
