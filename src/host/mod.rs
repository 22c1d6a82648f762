//! Host execution channel.
//!
//! This module provides:
//! - [`Host`] trait abstracting command execution against a target machine
//! - [`LocalHost`] for the machine mysqlvet runs on
//! - [`SshHost`] for remote targets reached over `ssh`
//! - [`MockHost`] for tests
//!
//! Facts (distribution and release) are gathered once when a host is
//! connected and are read-only afterwards.

pub mod command;
pub mod facts;
pub mod local;
pub mod mock;
pub mod ssh;

pub use command::CommandResult;
pub use facts::HostFacts;
pub use local::LocalHost;
pub use mock::MockHost;
pub use ssh::SshHost;

use crate::error::Result;
use crate::inventory::{ConnectionKind, HostEntry};

/// Trait for executing commands against a target machine.
///
/// Implementations are read-only with respect to this tool: `run` takes
/// `&self`, and repeated invocations with unchanged host state are expected
/// to yield the same results.
pub trait Host {
    /// Inventory name of this host.
    fn name(&self) -> &str;

    /// OS facts gathered at connect time.
    fn facts(&self) -> &HostFacts;

    /// Run a shell command on the host, capturing its output.
    ///
    /// A non-zero exit status is not an error; it is reported through
    /// [`CommandResult::success`]. `Err` means the command could not be
    /// executed at all.
    fn run(&self, command: &str) -> Result<CommandResult>;
}

/// Connect to an inventory host, choosing the transport from its entry.
pub fn connect(entry: &HostEntry) -> Result<Box<dyn Host>> {
    match entry.connection {
        ConnectionKind::Local => Ok(Box::new(LocalHost::named(&entry.name)?)),
        ConnectionKind::Ssh => Ok(Box::new(SshHost::connect(entry)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::HostEntry;

    #[test]
    fn connect_local_entry_yields_local_host() {
        let entry = HostEntry::local("localhost");
        let host = connect(&entry).unwrap();
        assert_eq!(host.name(), "localhost");
        // Facts come from the actual machine; just verify they resolved.
        assert!(!host.facts().distribution.is_empty());
    }
}
