//! Local host implementation.

use tracing::debug;

use super::command::{self, CommandResult};
use super::facts::{self, HostFacts};
use super::Host;
use crate::error::{MysqlvetError, Result};

/// The machine mysqlvet itself runs on.
pub struct LocalHost {
    name: String,
    facts: HostFacts,
}

impl LocalHost {
    /// Connect to the local machine under the default name `localhost`.
    pub fn connect() -> Result<Self> {
        Self::named("localhost")
    }

    /// Connect to the local machine under an inventory name.
    pub fn named(name: &str) -> Result<Self> {
        let facts =
            facts::gather(command::run_shell).map_err(|e| MysqlvetError::FactsUnavailable {
                host: name.to_string(),
                message: e.to_string(),
            })?;
        debug!(host = name, distribution = %facts.distribution, release = %facts.release, "connected local host");
        Ok(Self {
            name: name.to_string(),
            facts,
        })
    }
}

impl Host for LocalHost {
    fn name(&self) -> &str {
        &self.name
    }

    fn facts(&self) -> &HostFacts {
        &self.facts
    }

    fn run(&self, command: &str) -> Result<CommandResult> {
        // Log the executable only; full command lines can carry credentials.
        let exec = command.split_whitespace().next().unwrap_or("");
        debug!(host = %self.name, exec, "running command");
        command::run_shell(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_gathers_facts() {
        let host = LocalHost::connect().unwrap();
        assert_eq!(host.name(), "localhost");
        assert!(!host.facts().distribution.is_empty());
    }

    #[test]
    fn named_uses_inventory_name() {
        let host = LocalHost::named("instance").unwrap();
        assert_eq!(host.name(), "instance");
    }

    #[test]
    fn run_executes_locally() {
        let host = LocalHost::connect().unwrap();
        let result = host.run("echo local").unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("local"));
    }
}
