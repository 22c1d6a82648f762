//! MySQL installation checks.
//!
//! Four independent, read-only verification operations. Each builds one
//! command for the target host's `mysql` client, runs it, and asserts that
//! an expected substring appears in the captured stdout:
//!
//! - `version`: the expected server version is installed
//! - `root-login`: root credentials authenticate
//! - `database`: the configured database exists
//! - `user`: the configured user exists in `mysql.user`
//!
//! Checks have no ordering dependency and are run sequentially; one
//! check's failure never prevents the others from running. There are no
//! retries: a failed assertion is the terminal, user-visible result.

use std::time::Duration;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::VerifyConfig;
use crate::error::Result;
use crate::host::Host;
use crate::platform::{mysql_exec_path, Distribution};

/// Mask used wherever a command line is shown or serialized.
const PASSWORD_MASK: &str = "******";

/// The four verification operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    VersionInstalled,
    RootLogin,
    DatabaseExists,
    UserExists,
}

impl CheckKind {
    /// All checks, in the order they are run.
    pub const ALL: [CheckKind; 4] = [
        CheckKind::VersionInstalled,
        CheckKind::RootLogin,
        CheckKind::DatabaseExists,
        CheckKind::UserExists,
    ];

    /// Stable name used on the CLI and in reports.
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::VersionInstalled => "version",
            CheckKind::RootLogin => "root-login",
            CheckKind::DatabaseExists => "database",
            CheckKind::UserExists => "user",
        }
    }

    /// Parse a check name as given to `--only`.
    pub fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| crate::error::MysqlvetError::UnknownCheck {
                name: name.to_string(),
                known: Self::ALL
                    .iter()
                    .map(|k| k.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// One-line description for human output.
    pub fn description(&self) -> &'static str {
        match self {
            CheckKind::VersionInstalled => "expected MySQL version installed",
            CheckKind::RootLogin => "root credentials authenticate",
            CheckKind::DatabaseExists => "expected database exists",
            CheckKind::UserExists => "expected user exists",
        }
    }
}

impl Serialize for CheckKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Result of running one check on one host.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// Which check ran.
    pub check: CheckKind,

    /// Inventory name of the host.
    pub host: String,

    /// Whether the expected substring was found.
    pub passed: bool,

    /// The command issued, with the password masked.
    pub command: String,

    /// Substring the check looked for.
    pub expected: String,

    /// Captured stdout of the command.
    pub stdout: String,

    /// Server version extracted from the output, where one was present.
    pub found_version: Option<String>,

    /// How long the command took.
    #[serde(serialize_with = "serialize_millis", rename = "duration_ms")]
    pub duration: Duration,
}

fn serialize_millis<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Build the command for a check. `password` is substituted as-is, which
/// lets the same builder produce both the real and the masked form.
fn build_command(kind: CheckKind, exec: &str, password: &str) -> String {
    match kind {
        CheckKind::VersionInstalled => format!("{} --version", exec),
        CheckKind::RootLogin => {
            format!("{} -u root -p{} -e \"SELECT VERSION();\"", exec, password)
        }
        CheckKind::DatabaseExists => {
            format!("{} -u root -p{} -e \"SHOW DATABASES;\"", exec, password)
        }
        CheckKind::UserExists => format!(
            "{} -u root -p{} -e \"SELECT User FROM mysql.user;\"",
            exec, password
        ),
    }
}

/// The substring a check asserts on.
fn expected_substring(kind: CheckKind, config: &VerifyConfig) -> String {
    match kind {
        CheckKind::VersionInstalled | CheckKind::RootLogin => config.mysql_version.clone(),
        CheckKind::DatabaseExists => config.database.clone(),
        CheckKind::UserExists => config.user.clone(),
    }
}

/// Extract a version number from mysql client output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"Ver\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

/// Run a single check against a host.
///
/// `Err` means the command could not be executed; an absent substring is
/// an ordinary outcome with `passed == false`.
pub fn run_check(
    kind: CheckKind,
    host: &dyn Host,
    config: &VerifyConfig,
) -> Result<CheckOutcome> {
    let dist = Distribution::parse(&host.facts().distribution);
    let exec = mysql_exec_path(&dist);

    let command = build_command(kind, exec, &config.root_password);
    let result = host.run(&command)?;

    let expected = expected_substring(kind, config);
    let passed = result.stdout.contains(&expected);
    let found_version = match kind {
        CheckKind::VersionInstalled | CheckKind::RootLogin => extract_version(&result.stdout),
        _ => None,
    };
    debug!(host = host.name(), check = kind.name(), passed, "check finished");

    Ok(CheckOutcome {
        check: kind,
        host: host.name().to_string(),
        passed,
        command: build_command(kind, exec, PASSWORD_MASK),
        expected,
        stdout: result.stdout,
        found_version,
        duration: result.duration,
    })
}

/// Run a set of checks against a host, sequentially.
///
/// Each check's result is collected independently so an execution error in
/// one check still lets the remaining checks run.
pub fn run_all(
    host: &dyn Host,
    config: &VerifyConfig,
    kinds: &[CheckKind],
) -> Vec<(CheckKind, Result<CheckOutcome>)> {
    kinds
        .iter()
        .map(|&kind| (kind, run_check(kind, host, config)))
        .collect()
}
