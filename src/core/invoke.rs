//! Child process execution and result capture
//!
//! Spawns a built argument vector as a child process and folds everything
//! the caller needs to know into an [`InvocationResult`] value. Failure to
//! launch is data, not a panic or an `Err`: the adapter boundary never
//! surfaces an unwound error for a compiler invocation.

use serde::Serialize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::core::command::display_command;

/// Exit code reported when no process was spawned at all.
///
/// Distinguishes a launch failure from a real nonzero exit; a compiler that
/// actually ran always reports its own code.
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = -1;

/// Outcome of one compiler invocation.
///
/// One-shot value object, produced once per call and immutable thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationResult {
    /// True iff the process was spawned and exited with code zero
    pub success: bool,
    /// Process exit code, or [`LAUNCH_FAILURE_EXIT_CODE`] when no process ran
    pub exit_code: i32,
    /// Captured standard output, empty if none was produced
    pub stdout: String,
    /// Captured standard error, empty if none was produced
    pub stderr: String,
    /// Human-readable explanation, set only on preflight/launch failure
    pub error: Option<String>,
    /// The exact argument vector that was (or would have been) executed
    pub command: Vec<String>,
}

impl InvocationResult {
    /// Result for a process that was spawned and ran to completion.
    pub fn completed(exit_code: i32, stdout: String, stderr: String, command: Vec<String>) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
            stdout,
            stderr,
            error: None,
            command,
        }
    }

    /// Result for a failure before or during process launch.
    pub fn launch_failure(error: impl Into<String>, command: Vec<String>) -> Self {
        Self {
            success: false,
            exit_code: LAUNCH_FAILURE_EXIT_CODE,
            stdout: String::new(),
            stderr: String::new(),
            error: Some(error.into()),
            command,
        }
    }

    /// Shell-quoted form of the executed command, for logs.
    pub fn command_line(&self) -> String {
        display_command(&self.command)
    }
}

/// Spawn an argument vector and wait for it to exit.
///
/// Element 0 is the program, the rest are its arguments. Both output
/// streams are captured fully rather than streamed; the calling task is
/// suspended until the child exits. No timeout is applied: a hung child
/// hangs the call site, which is acceptable for an interactive tool.
pub async fn execute(command: Vec<String>) -> InvocationResult {
    let Some((program, args)) = command.split_first() else {
        return InvocationResult::launch_failure("Empty command", command);
    };

    tracing::debug!(command = %display_command(&command), "spawning compiler process");

    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await;

    match output {
        Ok(output) => InvocationResult::completed(
            output.status.code().unwrap_or(LAUNCH_FAILURE_EXIT_CODE),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            command,
        ),
        Err(e) => {
            let message = format!("Failed to launch '{program}': {e}");
            InvocationResult::launch_failure(message, command)
        }
    }
}

/// Preflight check shared by the run/compile operations: the script must
/// exist before a process is spawned.
///
/// The check is advisory only; a file removed between check and spawn is an
/// accepted benign race for a single-user tool.
pub fn script_exists(script: &Path) -> bool {
    script.is_file()
}
