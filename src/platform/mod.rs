//! Target platform resolution.
//!
//! Maps the distribution/release strings reported by a host to the MySQL
//! client executable path and the platform-specific installer filename.
//! The installer filename is informational only (shown by `mysqlvet info`);
//! no check asserts against it.

use std::fmt;

/// Fixed path of the MySQL client on macOS installs.
const MACOS_MYSQL_PATH: &str = "/usr/local/mysql/bin/mysql";

/// APT config package used on Debian-family installs.
const APT_CONFIG_DEB: &str = "mysql-apt-config_0.8.10-1_all.deb";

/// Community release RPMs for the RHEL family.
const EL7_RELEASE_RPM: &str = "mysql80-community-release-el7-1.noarch.rpm";
const EL6_RELEASE_RPM: &str = "mysql80-community-release-el6-1.noarch.rpm";

/// An OS distribution as reported by host facts.
///
/// Linux family names match case-insensitively. `Mac OS X` matches exactly,
/// including case; a lowercased variant lands in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Distribution {
    Ubuntu,
    Debian,
    CentOs,
    Rhel,
    MacOs,
    /// Unrecognized distribution; keeps the original reported string.
    Other(String),
}

impl Distribution {
    /// Parse a distribution from a host-reported name.
    pub fn parse(name: &str) -> Self {
        if name == "Mac OS X" {
            return Distribution::MacOs;
        }
        match name.to_lowercase().as_str() {
            "ubuntu" => Distribution::Ubuntu,
            "debian" => Distribution::Debian,
            "centos" => Distribution::CentOs,
            "rhel" | "red hat enterprise linux server" => Distribution::Rhel,
            _ => Distribution::Other(name.to_string()),
        }
    }

    /// Whether this distribution installs MySQL from RPM release packages.
    pub fn is_rhel_family(&self) -> bool {
        matches!(self, Distribution::CentOs | Distribution::Rhel)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Ubuntu => write!(f, "ubuntu"),
            Distribution::Debian => write!(f, "debian"),
            Distribution::CentOs => write!(f, "centos"),
            Distribution::Rhel => write!(f, "rhel"),
            Distribution::MacOs => write!(f, "Mac OS X"),
            Distribution::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Resolve the MySQL client executable for a distribution.
///
/// macOS installs place the client outside the default search path; every
/// other platform resolves the bare command name via `$PATH`.
pub fn mysql_exec_path(dist: &Distribution) -> &str {
    match dist {
        Distribution::MacOs => MACOS_MYSQL_PATH,
        _ => "mysql",
    }
}

/// Resolve the installer filename for a distribution and release.
pub fn installer_filename(dist: &Distribution, release: &str, version: &str) -> String {
    match dist {
        Distribution::Ubuntu | Distribution::Debian => APT_CONFIG_DEB.to_string(),
        Distribution::CentOs | Distribution::Rhel => {
            if release.starts_with('7') {
                EL7_RELEASE_RPM.to_string()
            } else {
                // Known gap carried over from the provisioning role: nothing
                // distinguishes major versions 8 and later, so every non-"7"
                // release gets the el6 package name. Do not "fix" this here
                // without changing the role first.
                EL6_RELEASE_RPM.to_string()
            }
        }
        // Trailing period is intentional; the role appends the minor suffix.
        Distribution::MacOs => format!("mysql-{}-macos10.", version),
        Distribution::Other(name) => format!("unknown-{}", name),
    }
}
