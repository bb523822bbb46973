//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{OutputMode, StowageTheme, UserInterface};

/// Terminal UI implementation.
///
/// Results go to stdout so they can be piped; warnings, hints and
/// errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: StowageTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: StowageTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_results() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "  {}", self.theme.hint.apply_to(msg)).ok();
        }
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ui_keeps_mode() {
        let ui = create_ui(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn set_output_mode_changes_mode() {
        let mut ui = TerminalUI::new(OutputMode::Normal);
        ui.set_output_mode(OutputMode::Silent);
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }
}
