//! Shell command execution.

use crate::error::{BootstrapError, Result};
use std::process::{Command, Stdio};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }

    /// Standard output followed by standard error, trailing newlines trimmed.
    pub fn combined_output(&self) -> String {
        let stdout = self.stdout.trim_end();
        let stderr = self.stderr.trim_end();
        match (stdout.is_empty(), stderr.is_empty()) {
            (true, _) => stderr.to_string(),
            (false, true) => stdout.to_string(),
            (false, false) => format!("{}\n{}", stdout, stderr),
        }
    }
}

/// Something that can run a shell command line to completion.
///
/// The installer and the interpreter locator only ever talk to this trait,
/// so tests can substitute a recording runner for the real shell.
pub trait CommandRunner {
    /// Run `command` and wait for it to finish.
    ///
    /// A non-zero exit is reported through [`CommandResult::success`], not as
    /// an `Err`. `Err` means the command could not be started at all.
    fn run(&self, command: &str) -> Result<CommandResult>;
}

/// Runs commands through the user's shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        execute(command)
    }
}

/// Execute a shell command, capturing stdout and stderr.
///
/// The child is always waited on before this returns, so no process handle
/// outlives the call.
pub fn execute(command: &str) -> Result<CommandResult> {
    let shell = detect_shell();

    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag());
    cmd.arg(command);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Running `{}` via {}", command, shell);

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to spawn {}: {}", shell, e);
        BootstrapError::CommandFailed {
            command: command.to_string(),
            code: None,
            output: e.to_string(),
        }
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
///
/// Plain `-c` on Unix: prep commands call `sudo` and package managers that
/// may print to a TTY, and an interactive shell would fight them for it.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
