// src/watch/scanner.rs

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Extension filter compiled from the `WatchFileTypes` config list.
#[derive(Debug, Clone)]
pub enum TypeFilter {
    /// `"*"` was present: every file matches.
    All,
    /// Only files whose extension is in the set match. Files without an
    /// extension never match.
    Extensions(HashSet<String>),
}

impl TypeFilter {
    pub fn from_types(types: &[String]) -> Self {
        if types.iter().any(|t| t == "*") {
            TypeFilter::All
        } else {
            TypeFilter::Extensions(types.iter().cloned().collect())
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Extensions(set) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| set.contains(ext)),
        }
    }
}

/// Recursively collect the files under `root` that pass `filter`, skipping
/// any entry whose path is in `excludes` (exact match, no prefix
/// semantics).
///
/// If `root` cannot be listed as a directory (it is a plain file, missing,
/// or unreadable), the result is `[root]` so that a single file is a valid
/// watch target.
///
/// Directories are recursed into but never appear in the result. Entries
/// are visited in lexical order per directory, so the output is stable for
/// an unchanged tree. A per-scan set of canonicalized directory paths keeps
/// symlink cycles from recursing forever.
pub fn scan(root: &Path, filter: &TypeFilter, excludes: &HashSet<PathBuf>) -> Vec<PathBuf> {
    let first = match read_dir_sorted(root) {
        Ok(entries) => entries,
        Err(_) => return vec![root.to_path_buf()],
    };

    let mut found = Vec::new();
    let mut visited: HashSet<PathBuf> = HashSet::new();
    if let Ok(resolved) = fs::canonicalize(root) {
        visited.insert(resolved);
    }

    let mut pending: VecDeque<Vec<PathBuf>> = VecDeque::from([first]);

    while let Some(entries) = pending.pop_front() {
        for path in entries {
            if excludes.contains(&path) {
                continue;
            }

            if path.is_dir() {
                let resolved = match fs::canonicalize(&path) {
                    Ok(resolved) => resolved,
                    // Entry vanished between listing and resolution.
                    Err(_) => continue,
                };
                if !visited.insert(resolved) {
                    debug!(path = ?path, "directory already visited, skipping");
                    continue;
                }
                match read_dir_sorted(&path) {
                    Ok(children) => pending.push_back(children),
                    Err(err) => {
                        debug!(path = ?path, error = %err, "skipping unreadable directory");
                    }
                }
            } else if filter.matches(&path) {
                found.push(path);
            }
        }
    }

    found
}

/// List a directory's entries as full paths, in lexical order.
fn read_dir_sorted(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();
    Ok(entries)
}
