//! Host OS fact gathering.
//!
//! Facts are gathered through the same execution channel the checks use,
//! so the logic is shared between local and ssh hosts: `uname -s` decides
//! the platform family, then `/etc/os-release` (Linux) or `sw_vers`
//! (macOS) supplies the identification strings.

use serde::Serialize;

use super::command::CommandResult;
use crate::error::Result;

/// OS identification strings reported by a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostFacts {
    /// Distribution name (e.g. "ubuntu", "centos", "Mac OS X").
    pub distribution: String,

    /// Release string (e.g. "22.04", "7.6").
    pub release: String,
}

/// Gather facts by running identification commands through `run`.
///
/// Returns `anyhow::Result` so callers can attach the host name to the
/// failure.
pub fn gather<F>(run: F) -> anyhow::Result<HostFacts>
where
    F: Fn(&str) -> Result<CommandResult>,
{
    let uname = run("uname -s")?;
    if !uname.success {
        anyhow::bail!("uname failed with exit code {:?}", uname.exit_code);
    }

    if uname.stdout.trim() == "Darwin" {
        let release = run("sw_vers -productVersion")?;
        if !release.success {
            anyhow::bail!("sw_vers failed with exit code {:?}", release.exit_code);
        }
        return Ok(HostFacts {
            distribution: "Mac OS X".to_string(),
            release: release.stdout.trim().to_string(),
        });
    }

    let os_release = run("cat /etc/os-release")?;
    if !os_release.success {
        anyhow::bail!("/etc/os-release is not readable");
    }
    let (id, version_id) = parse_os_release(&os_release.stdout);
    Ok(HostFacts {
        distribution: id.ok_or_else(|| anyhow::anyhow!("os-release has no ID field"))?,
        release: version_id.unwrap_or_default(),
    })
}

/// Extract `ID` and `VERSION_ID` from os-release content.
///
/// Values may be quoted; quotes are stripped. `NAME` is used as a fallback
/// distribution when `ID` is absent.
pub fn parse_os_release(content: &str) -> (Option<String>, Option<String>) {
    let mut id = None;
    let mut name = None;
    let mut version_id = None;

    for line in content.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("ID=") {
            id = Some(unquote(value));
        } else if let Some(value) = line.strip_prefix("NAME=") {
            name = Some(unquote(value));
        } else if let Some(value) = line.strip_prefix("VERSION_ID=") {
            version_id = Some(unquote(value));
        }
    }

    (id.or(name), version_id)
}

fn unquote(value: &str) -> String {
    value.trim_matches('"').to_string()
}
