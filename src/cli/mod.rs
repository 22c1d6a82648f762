//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, InfoArgs};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
