//! Local shell command execution.

use crate::error::{MysqlvetError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Execute a shell command locally, capturing stdout and stderr.
///
/// Commands run through `sh -c` so the target's normal search path applies
/// when resolving bare command names like `mysql`.
pub fn run_shell(command: &str) -> Result<CommandResult> {
    let start = Instant::now();

    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .output()
        .map_err(|_| MysqlvetError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_shell_successful_command() {
        let result = run_shell("echo hello").unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn run_shell_failing_command_is_ok_not_err() {
        let result = run_shell("exit 3").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn run_shell_missing_binary_reports_nonzero() {
        // `sh -c` itself runs fine; the missing binary surfaces as exit 127.
        let result = run_shell("this-command-does-not-exist-12345").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(127));
    }

    #[test]
    fn run_shell_captures_stderr() {
        let result = run_shell("echo oops >&2").unwrap();
        assert!(result.success);
        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn command_result_tracks_duration() {
        let result = run_shell("echo fast").unwrap();
        assert!(result.duration.as_millis() < 5000);
    }
}
