//! ### Runs the tf command line client
//!
//! One function per tf command, each returning the decoded output

use std::process::{Command, Output};

use crate::core::{context::TfContext, error::{AppError, AppResult}, utils::auto_decode};

/// Helper function to execute a command and handle errors.
fn execute_command(mut command: Command) -> AppResult<Output> {
    tracing::debug!("Running {:?}", command);
    let output = command.output()?;

    if !output.status.success() {
        return Err(AppError::TfCommandFailed {
            command: format!("{:?}", command),
            _stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(output)
}

/// ### tf status
/// Returns the decoded `tf status /format:xml` document for `paths` (the whole workspace when empty)
pub fn tf_status(ctx: &TfContext, paths: &[&str]) -> AppResult<String> {
    let mut command = Command::new(ctx.get_tf_executable());
    command
        .current_dir(ctx.get_workspace_dir())
        .args(["status", "/format:xml", "/recursive", "/noprompt"]);

    if paths.is_empty() {
        command.arg(".");
    } else {
        command.args(paths);
    }

    let output = execute_command(command)?;
    auto_decode(&output.stdout)
}
