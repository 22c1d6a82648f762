//! Error types for mysqlvet operations.
//!
//! This module defines [`MysqlvetError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MysqlvetError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MysqlvetError::Other`) for unexpected errors
//! - Check assertion failures are data (`CheckOutcome`), not errors; only a
//!   check whose command could not run at all surfaces as `CommandFailed`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for mysqlvet operations.
#[derive(Debug, Error)]
pub enum MysqlvetError {
    /// Inventory file not found at the configured location.
    #[error("Inventory not found: {path}")]
    InventoryNotFound { path: PathBuf },

    /// Failed to parse the inventory file.
    #[error("Failed to parse inventory at {path}: {message}")]
    InventoryParse { path: PathBuf, message: String },

    /// Host facts could not be gathered (unreachable host, unreadable
    /// os-release, and the like).
    #[error("Could not gather facts for host '{host}': {message}")]
    FactsUnavailable { host: String, message: String },

    /// Shell command could not be executed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Unknown check name passed to `--only`.
    #[error("Unknown check '{name}' (expected one of: {known})")]
    UnknownCheck { name: String, known: String },

    /// No inventory host matched a `--host` filter.
    #[error("No inventory host named '{name}'")]
    HostNotFound { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for mysqlvet operations.
pub type Result<T> = std::result::Result<T, MysqlvetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_not_found_displays_path() {
        let err = MysqlvetError::InventoryNotFound {
            path: PathBuf::from("/tmp/inventory.ini"),
        };
        assert!(err.to_string().contains("/tmp/inventory.ini"));
    }

    #[test]
    fn inventory_parse_displays_path_and_message() {
        let err = MysqlvetError::InventoryParse {
            path: PathBuf::from("/inv.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/inv.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn facts_unavailable_displays_host() {
        let err = MysqlvetError::FactsUnavailable {
            host: "db1".into(),
            message: "connection refused".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("db1"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = MysqlvetError::CommandFailed {
            command: "mysql --version".into(),
            code: Some(127),
        };
        let msg = err.to_string();
        assert!(msg.contains("mysql --version"));
        assert!(msg.contains("127"));
    }

    #[test]
    fn unknown_check_displays_name_and_known() {
        let err = MysqlvetError::UnknownCheck {
            name: "bogus".into(),
            known: "version, root-login, database, user".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("root-login"));
    }

    #[test]
    fn host_not_found_displays_name() {
        let err = MysqlvetError::HostNotFound {
            name: "missing-host".into(),
        };
        assert!(err.to_string().contains("missing-host"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MysqlvetError = io_err.into();
        assert!(matches!(err, MysqlvetError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(MysqlvetError::HostNotFound { name: "x".into() })
        }
        assert!(returns_error().is_err());
    }
}
