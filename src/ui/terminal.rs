//! Terminal UI implementation.

use console::style;

use super::{OutputMode, UserInterface};

/// UI for real terminal usage. Status lines go to stdout, errors to stderr.
pub struct TerminalUI {
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    /// Create a terminal UI.
    pub fn new(interactive: bool, mode: OutputMode) -> Self {
        Self { mode, interactive }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn raw(&mut self, body: &str) {
        println!("{}", body);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", style(msg).green());
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", style(msg).yellow());
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", style(msg).red());
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            println!("{}", style(title).bold());
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Create the UI for a run.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(interactive, mode))
}
