//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// mysqlvet - Verify MySQL server installations across inventory hosts.
#[derive(Debug, Parser)]
#[command(name = "mysqlvet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the Ansible inventory listing target hosts
    #[arg(short, long, global = true, env = "MOLECULE_INVENTORY_FILE")]
    pub inventory: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the verification checks (default if no command specified)
    Check(CheckArgs),

    /// Show resolved configuration and per-host platform info
    Info(InfoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Run only the named checks (comma-separated:
    /// version,root-login,database,user)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Verify a single inventory host
    #[arg(long)]
    pub host: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Expected MySQL version (overrides MYSQL_VERSION)
    #[arg(long, value_name = "VERSION")]
    pub mysql_version: Option<String>,

    /// MySQL root password (overrides MYSQL_ROOT_PASSWORD)
    #[arg(long, value_name = "PASSWORD")]
    pub root_password: Option<String>,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
