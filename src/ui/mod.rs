//! Terminal output for the CLI.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing styled output to the terminal
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use stowage::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("/srv/site/base_app/templates/index.html");
//! assert!(ui.has_message("index.html"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, StowageTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a contextual hint.
    fn hint(&mut self, msg: &str);
}
