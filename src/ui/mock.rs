//! Mock UI implementation for testing.
//!
//! `MockUI` implements the [`UserInterface`] trait and captures all output
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use mysqlvet::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting checks");
//! ui.success("All checks passed");
//!
//! assert!(ui.messages().contains(&"Starting checks".to_string()));
//! assert!(ui.successes().contains(&"All checks passed".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    raws: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured machine-readable bodies.
    pub fn raws(&self) -> &[String] {
        &self.raws
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All captured output lines of any kind, in no particular order.
    pub fn all_output(&self) -> Vec<String> {
        let mut all = Vec::new();
        all.extend(self.messages.iter().cloned());
        all.extend(self.raws.iter().cloned());
        all.extend(self.successes.iter().cloned());
        all.extend(self.warnings.iter().cloned());
        all.extend(self.errors.iter().cloned());
        all.extend(self.headers.iter().cloned());
        all
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn raw(&mut self, body: &str) {
        self.raws.push(body.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_output_kind() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.raw("{}");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.show_header("h");

        assert_eq!(ui.messages(), ["m".to_string()]);
        assert_eq!(ui.raws(), ["{}".to_string()]);
        assert_eq!(ui.successes(), ["s".to_string()]);
        assert_eq!(ui.warnings(), ["w".to_string()]);
        assert_eq!(ui.errors(), ["e".to_string()]);
        assert_eq!(ui.headers(), ["h".to_string()]);
    }

    #[test]
    fn with_mode_sets_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn all_output_combines_streams() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.error("two");
        let all = ui.all_output();
        assert!(all.contains(&"one".to_string()));
        assert!(all.contains(&"two".to_string()));
    }
}
