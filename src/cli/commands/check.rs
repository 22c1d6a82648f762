//! Check command implementation.
//!
//! The `mysqlvet check` command runs the MySQL verification checks against
//! every host in the inventory (or implicit localhost).

use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use crate::checks::{run_all, CheckKind};
use crate::cli::args::CheckArgs;
use crate::config::VerifyConfig;
use crate::error::{MysqlvetError, Result};
use crate::host;
use crate::inventory::{HostEntry, Inventory};
use crate::report::{HostReport, RunReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    inventory: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(inventory: Option<PathBuf>, args: CheckArgs) -> Self {
        Self { inventory, args }
    }

    /// Resolve the set of checks to run from `--only`.
    fn selected_checks(&self) -> Result<Vec<CheckKind>> {
        if self.args.only.is_empty() {
            return Ok(CheckKind::ALL.to_vec());
        }
        self.args
            .only
            .iter()
            .map(|name| CheckKind::parse(name))
            .collect()
    }

    /// Load the target host entries.
    ///
    /// With no inventory the run falls back to the implicit localhost, the
    /// same target an inventory-less Ansible play would use.
    fn target_hosts(&self) -> Result<Vec<HostEntry>> {
        let Some(path) = &self.inventory else {
            // A --host filter can only match inventory names; without an
            // inventory it must not silently fall back to localhost.
            if let Some(name) = &self.args.host {
                return Err(MysqlvetError::HostNotFound { name: name.clone() });
            }
            debug!("no inventory given, targeting implicit localhost");
            return Ok(vec![HostEntry::local("localhost")]);
        };

        let inventory = Inventory::load(path)?;
        debug!(
            path = %path.display(),
            hosts = inventory.host_count(),
            "inventory loaded"
        );

        match &self.args.host {
            Some(name) => match inventory.get_host(name) {
                Some(entry) => Ok(vec![entry.clone()]),
                None => Err(MysqlvetError::HostNotFound {
                    name: name.clone(),
                }),
            },
            None => Ok(inventory.hosts().to_vec()),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let kinds = match self.selected_checks() {
            Ok(kinds) => kinds,
            Err(MysqlvetError::UnknownCheck { name, known }) => {
                ui.error(&format!("Unknown check '{}' (known: {})", name, known));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let config = VerifyConfig::resolve().with_overrides(
            self.args.mysql_version.as_deref(),
            self.args.root_password.as_deref(),
        );

        let entries = match self.target_hosts() {
            Ok(entries) => entries,
            Err(e @ MysqlvetError::InventoryNotFound { .. })
            | Err(e @ MysqlvetError::InventoryParse { .. })
            | Err(e @ MysqlvetError::HostNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if !self.args.json {
            ui.show_header(&format!(
                "Verifying MySQL {} on {} host(s)",
                config.mysql_version,
                entries.len()
            ));
        }

        let mut report = RunReport::new(config.clone());
        let mut connect_failures = false;

        for entry in &entries {
            match host::connect(entry) {
                Ok(target) => {
                    let results = run_all(target.as_ref(), &config, &kinds);
                    report.add_host(
                        HostReport::for_host(target.as_ref(), &config).with_results(results),
                    );
                }
                Err(e) => {
                    // Reported even under --json: errors go to stderr, so
                    // the JSON body on stdout stays clean.
                    connect_failures = true;
                    ui.error(&format!("{}: {}", entry.name, e));
                }
            }
        }

        if self.args.json {
            let json = report
                .to_json()
                .context("failed to serialize run report")?;
            ui.raw(&json);
        } else {
            report.render(ui);
        }

        if report.all_passed() && !connect_failures {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
