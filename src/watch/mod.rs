// src/watch/mod.rs

//! Change detection: scanning, snapshots, and the per-root polling loop.
//!
//! This module is responsible for:
//! - Recursively enumerating files under a watch root with extension and
//!   exclude filtering (`scanner`).
//! - Tracking last-observed modification times per root and classifying
//!   changes as Created/Modified/Deleted (`snapshot`).
//! - Running one polling loop per root that diffs fresh scans against the
//!   snapshot (`watcher`).
//!
//! It does **not** run commands; a non-empty change set is handed to the
//! `exec` module for templating and dispatch.

pub mod scanner;
pub mod snapshot;
pub mod watcher;

pub use scanner::{scan, TypeFilter};
pub use snapshot::{ChangeRecord, ChangeSet, ChangeStatus, PathSnapshot};
pub use watcher::PathWatcher;
