//! Verification run configuration.
//!
//! A [`VerifyConfig`] is resolved once per run from environment variables
//! (with defaults) plus optional CLI overrides, and is immutable afterwards.
//! Every check in a run observes the same resolved configuration.
//!
//! Resolution takes an environment-lookup function as a parameter so tests
//! can inject a fake environment instead of mutating the process env.

use serde::Serialize;

/// Default expected MySQL version when `MYSQL_VERSION` is unset.
pub const DEFAULT_MYSQL_VERSION: &str = "8.0.13";

/// Default root password when `MYSQL_ROOT_PASSWORD` is unset.
pub const DEFAULT_ROOT_PASSWORD: &str = "root";

/// Database the provisioning role is expected to have created.
pub const MYSQL_DATABASE: &str = "moleculetestdb";

/// User the provisioning role is expected to have created.
pub const MYSQL_USER: &str = "moleculetestuser";

/// Path separator on all supported target platforms.
pub const PATH_SEPARATOR: &str = "/";

/// Scratch directory on all supported target platforms.
pub const TEMP_DIR: &str = "/tmp";

/// Resolved configuration for a verification run.
///
/// The password is deliberately excluded from serialized output; reports
/// embed this struct directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyConfig {
    /// Expected MySQL server version substring.
    pub mysql_version: String,

    /// Root password used for authenticated checks.
    #[serde(skip_serializing)]
    pub root_password: String,

    /// Database expected to exist.
    pub database: String,

    /// User expected to exist in `mysql.user`.
    pub user: String,

    /// Path separator for the target platform.
    pub path_separator: String,

    /// Scratch directory on the target.
    pub temp_dir: String,
}

impl VerifyConfig {
    /// Resolve configuration from the process environment.
    pub fn resolve() -> Self {
        Self::resolve_with_env(|key| std::env::var(key))
    }

    /// Resolve configuration with a custom env var lookup (for testing).
    pub fn resolve_with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        Self {
            mysql_version: env_fn("MYSQL_VERSION")
                .unwrap_or_else(|_| DEFAULT_MYSQL_VERSION.to_string()),
            root_password: env_fn("MYSQL_ROOT_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ROOT_PASSWORD.to_string()),
            database: MYSQL_DATABASE.to_string(),
            user: MYSQL_USER.to_string(),
            path_separator: PATH_SEPARATOR.to_string(),
            temp_dir: TEMP_DIR.to_string(),
        }
    }

    /// Apply CLI flag overrides. Flags win over environment and defaults.
    pub fn with_overrides(mut self, version: Option<&str>, password: Option<&str>) -> Self {
        if let Some(v) = version {
            self.mysql_version = v.to_string();
        }
        if let Some(p) = password {
            self.root_password = p.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn resolve_uses_defaults_in_clean_env() {
        let config = VerifyConfig::resolve_with_env(make_env(&[]));
        assert_eq!(config.mysql_version, "8.0.13");
        assert_eq!(config.root_password, "root");
        assert_eq!(config.database, "moleculetestdb");
        assert_eq!(config.user, "moleculetestuser");
        assert_eq!(config.path_separator, "/");
        assert_eq!(config.temp_dir, "/tmp");
    }

    #[test]
    fn resolve_honors_mysql_version_env() {
        let config = VerifyConfig::resolve_with_env(make_env(&[("MYSQL_VERSION", "8.0.20")]));
        assert_eq!(config.mysql_version, "8.0.20");
    }

    #[test]
    fn resolve_honors_root_password_env() {
        let config =
            VerifyConfig::resolve_with_env(make_env(&[("MYSQL_ROOT_PASSWORD", "s3cret")]));
        assert_eq!(config.root_password, "s3cret");
    }

    #[test]
    fn unrelated_env_vars_are_ignored() {
        let config = VerifyConfig::resolve_with_env(make_env(&[("MYSQL_VERSIONS", "9.9.9")]));
        assert_eq!(config.mysql_version, "8.0.13");
    }

    #[test]
    fn resolution_is_deterministic() {
        let env = [("MYSQL_VERSION", "8.0.20"), ("MYSQL_ROOT_PASSWORD", "pw")];
        let a = VerifyConfig::resolve_with_env(make_env(&env));
        let b = VerifyConfig::resolve_with_env(make_env(&env));
        assert_eq!(a, b);
    }

    #[test]
    fn overrides_win_over_env() {
        let config = VerifyConfig::resolve_with_env(make_env(&[("MYSQL_VERSION", "8.0.20")]))
            .with_overrides(Some("5.7.44"), None);
        assert_eq!(config.mysql_version, "5.7.44");
        assert_eq!(config.root_password, "root");
    }

    #[test]
    fn none_overrides_keep_resolved_values() {
        let config = VerifyConfig::resolve_with_env(make_env(&[])).with_overrides(None, None);
        assert_eq!(config.mysql_version, "8.0.13");
        assert_eq!(config.root_password, "root");
    }

    #[test]
    fn password_is_not_serialized() {
        let config = VerifyConfig::resolve_with_env(make_env(&[]));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("root_password"));
        assert!(json.contains("moleculetestdb"));
    }
}
