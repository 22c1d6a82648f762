//! Mysqlvet - MySQL installation verification for Ansible-provisioned hosts.
//!
//! Mysqlvet is a CLI tool that checks freshly provisioned hosts for a working
//! MySQL server: the expected version is installed, root can log in, and the
//! provisioning database and user exist.
//!
//! # Modules
//!
//! - [`checks`] - The verification checks and their command lines
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Expected-state configuration resolved from the environment
//! - [`error`] - Error types and result aliases
//! - [`host`] - Host connections (local, ssh) and command execution
//! - [`inventory`] - Ansible inventory parsing (INI and YAML)
//! - [`platform`] - Distribution detection and MySQL path/installer mapping
//! - [`report`] - Structured run reports and terminal rendering
//! - [`ui`] - Terminal output abstraction
//!
//! # Example
//!
//! ```
//! use mysqlvet::checks::CheckKind;
//! use mysqlvet::config::VerifyConfig;
//! use mysqlvet::host::MockHost;
//!
//! let host = MockHost::new("db1", "ubuntu", "22.04")
//!     .with_default_response("mysql  Ver 8.0.13 for Linux");
//! let config = VerifyConfig::resolve();
//! let outcome = mysqlvet::checks::run_check(CheckKind::VersionInstalled, &host, &config).unwrap();
//! assert!(outcome.passed);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod inventory;
pub mod platform;
pub mod report;
pub mod ui;

pub use error::{MysqlvetError, Result};
