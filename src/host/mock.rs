//! Mock host implementation for testing.
//!
//! `MockHost` implements the [`Host`] trait with scripted command output
//! and records every command issued for later assertion.
//!
//! # Example
//!
//! ```
//! use mysqlvet::host::{Host, MockHost};
//!
//! let host = MockHost::new("instance", "ubuntu", "22.04")
//!     .stub("mysql --version", "mysql  Ver 8.0.13 for Linux on x86_64");
//!
//! let result = host.run("mysql --version").unwrap();
//! assert!(result.stdout.contains("8.0.13"));
//! assert_eq!(host.commands(), vec!["mysql --version".to_string()]);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use super::command::CommandResult;
use super::facts::HostFacts;
use super::Host;
use crate::error::{MysqlvetError, Result};

/// Scripted fake host for tests.
#[derive(Debug)]
pub struct MockHost {
    name: String,
    facts: HostFacts,
    responses: HashMap<String, String>,
    error_commands: HashSet<String>,
    default_response: Option<String>,
    commands: Mutex<Vec<String>>,
}

impl MockHost {
    /// Create a mock host with the given name and facts.
    pub fn new(name: &str, distribution: &str, release: &str) -> Self {
        Self {
            name: name.to_string(),
            facts: HostFacts {
                distribution: distribution.to_string(),
                release: release.to_string(),
            },
            responses: HashMap::new(),
            error_commands: HashSet::new(),
            default_response: None,
            commands: Mutex::new(Vec::new()),
        }
    }

    /// Script a successful response for an exact command string.
    pub fn stub(mut self, command: &str, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), stdout.to_string());
        self
    }

    /// Make an exact command string fail as an execution error (`Err`),
    /// not a non-zero exit.
    pub fn error_on(mut self, command: &str) -> Self {
        self.error_commands.insert(command.to_string());
        self
    }

    /// Fallback stdout for any command without an explicit stub.
    /// Unstubbed commands without a default report exit 127.
    pub fn with_default_response(mut self, stdout: &str) -> Self {
        self.default_response = Some(stdout.to_string());
        self
    }

    /// Commands issued so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl Host for MockHost {
    fn name(&self) -> &str {
        &self.name
    }

    fn facts(&self) -> &HostFacts {
        &self.facts
    }

    fn run(&self, command: &str) -> Result<CommandResult> {
        self.commands.lock().unwrap().push(command.to_string());

        if self.error_commands.contains(command) {
            return Err(MysqlvetError::CommandFailed {
                command: command.to_string(),
                code: None,
            });
        }

        let duration = Duration::from_millis(1);
        match self.responses.get(command).or(self.default_response.as_ref()) {
            Some(stdout) => Ok(CommandResult::success(
                stdout.clone(),
                String::new(),
                duration,
            )),
            None => Ok(CommandResult::failure(
                Some(127),
                String::new(),
                format!("sh: command not stubbed: {}", command),
                duration,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stubbed_command_returns_scripted_stdout() {
        let host = MockHost::new("m", "ubuntu", "22.04").stub("echo hi", "hi\n");
        let result = host.run("echo hi").unwrap();
        assert!(result.success);
        assert_eq!(result.stdout, "hi\n");
    }

    #[test]
    fn unstubbed_command_fails_with_127() {
        let host = MockHost::new("m", "ubuntu", "22.04");
        let result = host.run("unknown").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(127));
    }

    #[test]
    fn default_response_covers_unstubbed_commands() {
        let host = MockHost::new("m", "ubuntu", "22.04").with_default_response("anything");
        let result = host.run("whatever").unwrap();
        assert!(result.success);
        assert_eq!(result.stdout, "anything");
    }

    #[test]
    fn error_on_returns_execution_error() {
        let host = MockHost::new("m", "ubuntu", "22.04").error_on("mysql --version");
        assert!(host.run("mysql --version").is_err());
    }

    #[test]
    fn commands_are_recorded_in_order() {
        let host = MockHost::new("m", "ubuntu", "22.04")
            .stub("first", "1")
            .stub("second", "2");
        host.run("first").unwrap();
        host.run("second").unwrap();
        assert_eq!(
            host.commands(),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn facts_reflect_construction() {
        let host = MockHost::new("mac", "Mac OS X", "10.14");
        assert_eq!(host.facts().distribution, "Mac OS X");
        assert_eq!(host.facts().release, "10.14");
    }
}
