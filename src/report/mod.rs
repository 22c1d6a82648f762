//! Run reports.
//!
//! Collects per-host check results into a [`RunReport`] that renders as
//! styled per-check status lines or as JSON (`--json`). The root password
//! never appears in a report; commands are stored pre-masked.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::checks::{CheckKind, CheckOutcome};
use crate::config::VerifyConfig;
use crate::error::Result as CheckResult;
use crate::host::Host;
use crate::platform::{installer_filename, mysql_exec_path, Distribution};
use crate::ui::UserInterface;

/// Maximum command output carried into human-readable failure details.
const MAX_OUTPUT_CHARS: usize = 400;

/// One check's entry in a report.
///
/// `error` is set when the check's command could not be executed at all;
/// the remaining detail fields are then absent.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub check: CheckKind,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    /// Build a report entry from a check result.
    pub fn from_result(kind: CheckKind, result: CheckResult<CheckOutcome>) -> Self {
        match result {
            Ok(outcome) => Self {
                check: kind,
                passed: outcome.passed,
                command: Some(outcome.command),
                expected: Some(outcome.expected),
                found_version: outcome.found_version,
                stdout: Some(outcome.stdout),
                duration_ms: Some(outcome.duration.as_millis() as u64),
                error: None,
            },
            Err(e) => Self {
                check: kind,
                passed: false,
                command: None,
                expected: None,
                found_version: None,
                stdout: None,
                duration_ms: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// All results for a single host, plus its platform resolution.
#[derive(Debug, Clone, Serialize)]
pub struct HostReport {
    pub host: String,
    pub distribution: String,
    pub release: String,
    pub mysql_exec: String,
    pub installer_filename: String,
    pub checks: Vec<CheckReport>,
}

impl HostReport {
    /// Create a host report from a connected host's facts.
    pub fn for_host(host: &dyn Host, config: &VerifyConfig) -> Self {
        let facts = host.facts();
        let dist = Distribution::parse(&facts.distribution);
        Self {
            host: host.name().to_string(),
            distribution: facts.distribution.clone(),
            release: facts.release.clone(),
            mysql_exec: mysql_exec_path(&dist).to_string(),
            installer_filename: installer_filename(&dist, &facts.release, &config.mysql_version),
            checks: Vec::new(),
        }
    }

    /// Attach check results.
    pub fn with_results(mut self, results: Vec<(CheckKind, CheckResult<CheckOutcome>)>) -> Self {
        self.checks = results
            .into_iter()
            .map(|(kind, result)| CheckReport::from_result(kind, result))
            .collect();
        self
    }
}

/// A complete verification run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub timestamp: DateTime<Utc>,
    pub config: VerifyConfig,
    pub hosts: Vec<HostReport>,
}

impl RunReport {
    /// Start a report for the given configuration.
    pub fn new(config: VerifyConfig) -> Self {
        Self {
            timestamp: Utc::now(),
            config,
            hosts: Vec::new(),
        }
    }

    /// Add a host's results.
    pub fn add_host(&mut self, host: HostReport) {
        self.hosts.push(host);
    }

    /// Whether every check on every host passed.
    pub fn all_passed(&self) -> bool {
        self.hosts
            .iter()
            .all(|h| h.checks.iter().all(|c| c.passed))
    }

    /// Total and failed check counts.
    pub fn counts(&self) -> (usize, usize) {
        let total = self.hosts.iter().map(|h| h.checks.len()).sum();
        let failed = self
            .hosts
            .iter()
            .flat_map(|h| &h.checks)
            .filter(|c| !c.passed)
            .count();
        (total, failed)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render human-readable status lines through the UI.
    pub fn render(&self, ui: &mut dyn UserInterface) {
        for host in &self.hosts {
            ui.message(&format!(
                "{} ({} {})",
                host.host, host.distribution, host.release
            ));
            for check in &host.checks {
                render_check(ui, check);
            }
        }

        let (total, failed) = self.counts();
        if failed == 0 {
            ui.success(&format!("All checks passed ({})", total));
        } else {
            ui.error(&format!("{} of {} checks failed", failed, total));
        }
    }
}

fn render_check(ui: &mut dyn UserInterface, check: &CheckReport) {
    if check.passed {
        let detail = check
            .found_version
            .as_deref()
            .map(|v| format!(" ({})", v))
            .unwrap_or_default();
        ui.success(&format!(
            "  [pass] {}{} - {}",
            check.check.name(),
            detail,
            check.check.description()
        ));
        if ui.output_mode().shows_command_output() {
            if let (Some(command), Some(ms)) = (&check.command, check.duration_ms) {
                ui.message(&format!("         command: {} ({}ms)", command, ms));
            }
        }
        return;
    }

    if let Some(error) = &check.error {
        ui.error(&format!(
            "  [ERROR] {} - could not run: {}",
            check.check.name(),
            error
        ));
        return;
    }

    ui.error(&format!(
        "  [FAIL] {} - {}",
        check.check.name(),
        check.check.description()
    ));
    if let Some(command) = &check.command {
        ui.message(&format!("         command: {}", command));
    }
    if let Some(expected) = &check.expected {
        ui.message(&format!("         expected substring: {:?}", expected));
    }
    if let Some(stdout) = &check.stdout {
        let trimmed = trim_output(stdout);
        if trimmed.is_empty() {
            ui.message("         output: (empty)");
        } else {
            ui.message(&format!("         output: {}", trimmed));
        }
    }
}

/// Collapse command output into a single bounded line for failure details.
fn trim_output(output: &str) -> String {
    let mut collapsed = output.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.len() > MAX_OUTPUT_CHARS {
        collapsed.truncate(MAX_OUTPUT_CHARS);
        collapsed.push_str("...");
    }
    collapsed
}
