//! Remote host implementation over ssh.
//!
//! Commands are wrapped in a non-interactive `ssh` invocation
//! (`BatchMode=yes`, so a missing key fails fast instead of prompting).
//! The inventory's `ansible_host`, `ansible_user`, and `ansible_port`
//! variables select the target.

use std::process::{Command, Stdio};
use std::time::Instant;

use tracing::debug;

use super::command::CommandResult;
use super::facts::{self, HostFacts};
use super::Host;
use crate::error::{MysqlvetError, Result};
use crate::inventory::HostEntry;

/// A remote target reached through the system `ssh` client.
pub struct SshHost {
    name: String,
    target: String,
    port: Option<u16>,
    facts: HostFacts,
}

impl SshHost {
    /// Connect to an inventory host and gather its facts over ssh.
    pub fn connect(entry: &HostEntry) -> Result<Self> {
        let address = entry.address.as_deref().unwrap_or(&entry.name);
        let target = match &entry.user {
            Some(user) => format!("{}@{}", user, address),
            None => address.to_string(),
        };

        let facts = facts::gather(|cmd| run_ssh(&target, entry.port, cmd)).map_err(|e| {
            MysqlvetError::FactsUnavailable {
                host: entry.name.clone(),
                message: e.to_string(),
            }
        })?;
        debug!(host = %entry.name, %target, distribution = %facts.distribution, "connected ssh host");

        Ok(Self {
            name: entry.name.clone(),
            target,
            port: entry.port,
            facts,
        })
    }
}

impl Host for SshHost {
    fn name(&self) -> &str {
        &self.name
    }

    fn facts(&self) -> &HostFacts {
        &self.facts
    }

    fn run(&self, command: &str) -> Result<CommandResult> {
        let exec = command.split_whitespace().next().unwrap_or("");
        debug!(host = %self.name, exec, "running command over ssh");
        run_ssh(&self.target, self.port, command)
    }
}

/// Run one command on `target` through ssh, capturing output.
///
/// An unreachable host surfaces as ssh's own non-zero exit (255), not as
/// an `Err`; only a spawn failure of the ssh client itself is an error.
fn run_ssh(target: &str, port: Option<u16>, command: &str) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new("ssh");
    cmd.arg("-o").arg("BatchMode=yes");
    if let Some(port) = port {
        cmd.arg("-p").arg(port.to_string());
    }
    cmd.arg(target).arg(command).stdin(Stdio::null());

    let output = cmd.output().map_err(|_| MysqlvetError::CommandFailed {
        command: format!("ssh {}", target),
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
    fn target_includes_user_when_set() {
        let mut entry = HostEntry::ssh("db1");
        entry.address = Some("192.0.2.10".to_string());
        entry.user = Some("deploy".to_string());

        let address = entry.address.as_deref().unwrap_or(&entry.name);
        let target = match &entry.user {
            Some(user) => format!("{}@{}", user, address),
            None => address.to_string(),
        };
        assert_eq!(target, "deploy@192.0.2.10");
    }

    #[test]
    fn target_falls_back_to_host_name() {
        let entry = HostEntry::ssh("db1.internal");
        let address = entry.address.as_deref().unwrap_or(&entry.name);
        assert_eq!(address, "db1.internal");
    }
}
