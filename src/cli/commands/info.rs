//! Info command implementation.
//!
//! The `mysqlvet info` command shows the resolved configuration and how
//! each inventory host's platform maps to MySQL paths and installer names.

use std::path::PathBuf;

use anyhow::Context;

use crate::cli::args::InfoArgs;
use crate::config::VerifyConfig;
use crate::error::{MysqlvetError, Result};
use crate::host;
use crate::inventory::{HostEntry, Inventory};
use crate::report::{HostReport, RunReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The info command implementation.
pub struct InfoCommand {
    inventory: Option<PathBuf>,
    args: InfoArgs,
}

impl InfoCommand {
    /// Create a new info command.
    pub fn new(inventory: Option<PathBuf>, args: InfoArgs) -> Self {
        Self { inventory, args }
    }

    fn target_hosts(&self) -> Result<Vec<HostEntry>> {
        match &self.inventory {
            Some(path) => Ok(Inventory::load(path)?.hosts().to_vec()),
            None => Ok(vec![HostEntry::local("localhost")]),
        }
    }
}

impl Command for InfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = VerifyConfig::resolve();

        let entries = match self.target_hosts() {
            Ok(entries) => entries,
            Err(e @ MysqlvetError::InventoryNotFound { .. })
            | Err(e @ MysqlvetError::InventoryParse { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let mut report = RunReport::new(config.clone());
        let mut had_error = false;

        for entry in &entries {
            match host::connect(entry) {
                Ok(target) => {
                    report.add_host(HostReport::for_host(target.as_ref(), &config));
                }
                Err(e) => {
                    had_error = true;
                    ui.error(&format!("{}: {}", entry.name, e));
                }
            }
        }

        if self.args.json {
            let json = report
                .to_json()
                .context("failed to serialize host info")?;
            ui.raw(&json);
        } else {
            ui.show_header("mysqlvet configuration");
            ui.message(&format!("Expected version:  {}", config.mysql_version));
            ui.message(&format!("Database:          {}", crate::config::MYSQL_DATABASE));
            ui.message(&format!("User:              {}", crate::config::MYSQL_USER));
            for host_report in &report.hosts {
                ui.message("");
                ui.message(&format!(
                    "{} ({} {})",
                    host_report.host, host_report.distribution, host_report.release
                ));
                ui.message(&format!("  mysql exec:  {}", host_report.mysql_exec));
                ui.message(&format!("  installer:   {}", host_report.installer_filename));
            }
        }

        if had_error {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn info_without_inventory_reports_localhost() {
        let cmd = InfoCommand::new(None, InfoArgs::default());
        let entries = cmd.target_hosts().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "localhost");
    }

    #[test]
    fn info_reports_connect_failures_under_json() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[db]").unwrap();
        writeln!(file, "unreachable.invalid").unwrap();
        let cmd = InfoCommand::new(
            Some(file.path().to_path_buf()),
            InfoArgs { json: true },
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui
            .errors()
            .iter()
            .any(|m| m.contains("unreachable.invalid")));
        assert!(ui.raws()[0].contains("\"hosts\""));
    }

    #[test]
    fn info_with_missing_inventory_fails_with_code_2() {
        let cmd = InfoCommand::new(
            Some(PathBuf::from("/nonexistent/hosts.ini")),
            InfoArgs::default(),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
    }
}
