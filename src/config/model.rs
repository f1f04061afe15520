// src/config/model.rs

use serde::{Deserialize, Serialize};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "config.hotreload.json";

/// Smallest polling interval we accept, in milliseconds.
pub const MIN_DELAY_MS: u64 = 10;

/// Top-level configuration as read from `config.hotreload.json`.
///
/// This is a direct mapping of the canonical schema:
///
/// ```json
/// {
///   "WatchFileTypes": ["ts", "js"],
///   "IncludePaths": ["./src"],
///   "ExcludePaths": ["./node_modules"],
///   "Commands": [{ "Command": "echo", "Args": ["Changed: .MODIFIED"] }],
///   "Delay": 100
/// }
/// ```
///
/// All fields are optional; absent or empty fields are filled by
/// [`WatchConfig::normalized`]. Once watching starts the value is immutable
/// and shared read-only between the watcher tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// File extensions to watch. `"*"` means every file.
    #[serde(default, rename = "WatchFileTypes")]
    pub watch_file_types: Vec<String>,

    /// Roots to poll. Relative entries resolve against the working
    /// directory; empty entries are skipped.
    #[serde(default, rename = "IncludePaths")]
    pub include_paths: Vec<String>,

    /// Paths excluded from scanning, matched exactly after being resolved
    /// to absolute form.
    #[serde(default, rename = "ExcludePaths")]
    pub exclude_paths: Vec<String>,

    /// Commands run whenever a polling cycle produces a non-empty change
    /// set.
    #[serde(default, rename = "Commands")]
    pub commands: Vec<CommandSpec>,

    /// Polling interval in milliseconds, floored to [`MIN_DELAY_MS`].
    #[serde(default, rename = "Delay")]
    pub delay_ms: u64,
}

/// A single command template from the `Commands` list.
///
/// Any argument may contain the literal token `.MODIFIED`, which is
/// replaced with the serialized change set at dispatch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSpec {
    #[serde(rename = "Command")]
    pub command: String,

    #[serde(default, rename = "Args")]
    pub args: Vec<String>,
}

impl WatchConfig {
    /// Fill the documented defaults for absent/empty fields and clamp the
    /// polling delay.
    pub fn normalized(mut self) -> Self {
        if self.watch_file_types.is_empty() {
            self.watch_file_types = vec!["*".to_string()];
        }
        if self.include_paths.is_empty() {
            self.include_paths = vec![".".to_string()];
        }
        if self.commands.is_empty() {
            self.commands = vec![CommandSpec {
                command: "echo".to_string(),
                args: vec!["Files Changes: .MODIFIED".to_string()],
            }];
        }
        self.delay_ms = self.delay_ms.max(MIN_DELAY_MS);
        self
    }
}

impl Default for WatchConfig {
    /// The config written by `hotreload init`.
    fn default() -> Self {
        Self {
            watch_file_types: vec!["*".to_string()],
            include_paths: vec![".".to_string()],
            exclude_paths: Vec::new(),
            commands: vec![CommandSpec {
                command: "echo".to_string(),
                args: vec!["Files Changes: .MODIFIED".to_string()],
            }],
            delay_ms: 100,
        }
    }
}
