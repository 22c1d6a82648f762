//! Command implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod info;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
