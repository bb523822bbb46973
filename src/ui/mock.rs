//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use stowage::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("index.html");
//! ui.warning("Provider 'shared' is not installed");
//!
//! assert!(ui.messages().contains(&"index.html".to_string()));
//! assert!(ui.has_warning("shared"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
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

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Check if any message contains the given text.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if any warning contains the given text.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if any error contains the given text.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if any hint contains the given text.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_output() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.warning("Be careful");
        ui.error("Oops");
        ui.hint("Try --explain");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
        assert!(ui.has_hint("--explain"));
    }

    #[test]
    fn mock_ui_partial_matches() {
        let mut ui = MockUI::new();
        ui.error("Could not locate template \"nav\"");
        assert!(ui.has_error("locate template"));
        assert!(!ui.has_error("something else"));
    }

    #[test]
    fn mock_ui_modes() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        ui.set_output_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
