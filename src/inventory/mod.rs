//! Ansible-style inventory parsing.
//!
//! Molecule hands the verifier an inventory file naming the hosts under
//! test. Two formats are supported, chosen by file extension:
//!
//! - INI (the molecule default): `[group]` sections with one host per
//!   line, optional `key=value` variables. `:vars` and `:children`
//!   sections are skipped.
//! - YAML (`.yml`/`.yaml`): the `all:`/`hosts:`/`children:` layout.
//!
//! Recognized host variables: `ansible_connection`, `ansible_host`,
//! `ansible_user`, `ansible_port`. Hosts named `localhost`/`127.0.0.1`
//! default to a local connection, matching Ansible's implicit localhost.

use std::path::Path;

use crate::error::{MysqlvetError, Result};

/// Transport used to reach a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Run commands directly on this machine.
    Local,
    /// Run commands through the system ssh client.
    Ssh,
}

/// One host from the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// Inventory name.
    pub name: String,

    /// Transport selected by `ansible_connection` (or implicit localhost).
    pub connection: ConnectionKind,

    /// `ansible_host` override; falls back to the inventory name.
    pub address: Option<String>,

    /// `ansible_user`.
    pub user: Option<String>,

    /// `ansible_port`.
    pub port: Option<u16>,
}

impl HostEntry {
    /// A host reached through local execution.
    pub fn local(name: &str) -> Self {
        Self {
            name: name.to_string(),
            connection: ConnectionKind::Local,
            address: None,
            user: None,
            port: None,
        }
    }

    /// A host reached over ssh.
    pub fn ssh(name: &str) -> Self {
        Self {
            name: name.to_string(),
            connection: ConnectionKind::Ssh,
            address: None,
            user: None,
            port: None,
        }
    }

    fn apply_var(&mut self, key: &str, value: &str) {
        match key {
            "ansible_connection" => {
                self.connection = if value == "local" {
                    ConnectionKind::Local
                } else {
                    ConnectionKind::Ssh
                };
            }
            "ansible_host" => self.address = Some(value.to_string()),
            "ansible_user" => self.user = Some(value.to_string()),
            "ansible_port" => self.port = value.parse().ok(),
            _ => {}
        }
    }
}

/// Whether a host name refers to the machine mysqlvet runs on.
fn is_implicit_localhost(name: &str) -> bool {
    name == "localhost" || name == "127.0.0.1"
}

fn default_entry(name: &str) -> HostEntry {
    if is_implicit_localhost(name) {
        HostEntry::local(name)
    } else {
        HostEntry::ssh(name)
    }
}

/// Parsed inventory: the flat list of hosts under test.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    hosts: Vec<HostEntry>,
}

impl Inventory {
    /// Load an inventory file, dispatching on extension.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MysqlvetError::InventoryNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yml") | Some("yaml")
        );
        if is_yaml {
            Self::parse_yaml(&content).map_err(|message| MysqlvetError::InventoryParse {
                path: path.to_path_buf(),
                message,
            })
        } else {
            Ok(Self::parse_ini(&content))
        }
    }

    /// All hosts, in file order.
    pub fn hosts(&self) -> &[HostEntry] {
        &self.hosts
    }

    /// Number of hosts.
    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }

    /// Find a host by inventory name.
    pub fn get_host(&self, name: &str) -> Option<&HostEntry> {
        self.hosts.iter().find(|h| h.name == name)
    }

    fn push_unique(&mut self, entry: HostEntry) {
        // A host listed in several groups is still one host.
        if self.get_host(&entry.name).is_none() {
            self.hosts.push(entry);
        }
    }

    /// Parse the INI inventory format.
    fn parse_ini(content: &str) -> Self {
        let mut inventory = Self::default();
        let mut in_host_section = true;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(section) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                // Only plain group sections list hosts.
                in_host_section = !section.contains(':');
                continue;
            }
            if !in_host_section {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(name) = parts.next() else { continue };
            let mut entry = default_entry(name);
            for var in parts {
                if let Some((key, value)) = var.split_once('=') {
                    entry.apply_var(key, value);
                }
            }
            inventory.push_unique(entry);
        }

        inventory
    }

    /// Parse the YAML inventory format.
    fn parse_yaml(content: &str) -> std::result::Result<Self, String> {
        let root: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        let mapping = root
            .as_mapping()
            .ok_or_else(|| "inventory root must be a mapping".to_string())?;

        let mut inventory = Self::default();
        for group in mapping.values() {
            collect_group(group, &mut inventory);
        }
        Ok(inventory)
    }
}

/// Walk a YAML group node, collecting `hosts` and recursing into `children`.
fn collect_group(group: &serde_yaml::Value, inventory: &mut Inventory) {
    let Some(group) = group.as_mapping() else {
        return;
    };

    if let Some(hosts) = group.get("hosts").and_then(|h| h.as_mapping()) {
        for (name, vars) in hosts {
            let Some(name) = name.as_str() else { continue };
            let mut entry = default_entry(name);
            if let Some(vars) = vars.as_mapping() {
                for (key, value) in vars {
                    let (Some(key), Some(value)) = (key.as_str(), yaml_scalar(value)) else {
                        continue;
                    };
                    entry.apply_var(key, &value);
                }
            }
            inventory.push_unique(entry);
        }
    }

    if let Some(children) = group.get("children").and_then(|c| c.as_mapping()) {
        for child in children.values() {
            collect_group(child, inventory);
        }
    }
}

fn yaml_scalar(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
