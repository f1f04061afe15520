// src/exec/command.rs

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::CommandSpec;
use crate::watch::snapshot::ChangeSet;

/// Literal token replaced with the serialized change set in command
/// arguments.
pub const MODIFIED_PLACEHOLDER: &str = ".MODIFIED";

/// Serialize a change set to the JSON text substituted into command
/// arguments: a pretty-printed array of `{"Path", "Status"}` records in
/// cycle-detection order.
pub fn serialize_change_set(changes: &ChangeSet) -> String {
    serde_json::to_string_pretty(changes).unwrap_or_else(|err| {
        warn!(error = %err, "failed to serialize change set");
        String::from("[]")
    })
}

/// Build the effective argument list for one command.
///
/// Every argument is retained; arguments containing the placeholder have
/// all its occurrences replaced, the rest pass through unchanged.
pub fn render_args(args: &[String], serialized: &str) -> Vec<String> {
    args.iter()
        .map(|arg| arg.replace(MODIFIED_PLACEHOLDER, serialized))
        .collect()
}

/// Run every configured command once for this change set, in order,
/// waiting for each to complete.
///
/// Spawn errors and non-zero exits are logged with the failing command and
/// reason; they never propagate to the caller.
pub async fn dispatch(changes: &ChangeSet, commands: &[CommandSpec]) {
    let serialized = serialize_change_set(changes);

    for spec in commands {
        if let Err(err) = run_command(spec, &serialized).await {
            warn!(command = %spec.command, error = %err, "command failed");
        }
    }
}

async fn run_command(spec: &CommandSpec, serialized: &str) -> Result<()> {
    let args = render_args(&spec.args, serialized);
    debug!(command = %spec.command, "spawning command");

    let output = Command::new(&spec.command)
        .args(&args)
        .output()
        .await
        .with_context(|| format!("spawning command '{}'", spec.command))?;

    // Captured stdout belongs to the operator, not the log stream.
    if !output.stdout.is_empty() {
        print!("{}", String::from_utf8_lossy(&output.stdout));
    }
    if !output.stderr.is_empty() {
        warn!(
            command = %spec.command,
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    }

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        warn!(command = %spec.command, exit_code = code, "command exited with failure");
    }

    Ok(())
}
