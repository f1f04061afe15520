// src/exec/mod.rs

//! Command templating and process execution.
//!
//! Given a non-empty change set, this module serializes it to JSON,
//! substitutes it into the configured command arguments via the
//! `.MODIFIED` placeholder, and runs each command to completion using
//! `tokio::process::Command`. Failures are logged and never abort the
//! polling loop that triggered the dispatch.

pub mod command;

pub use command::{dispatch, render_args, serialize_change_set, MODIFIED_PLACEHOLDER};
