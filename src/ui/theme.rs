//! Visual theme and styling.

use console::Style;

/// Stowage's visual theme.
#[derive(Debug, Clone)]
pub struct StowageTheme {
    /// Style for found probes (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for StowageTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl StowageTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            hint: Style::new().magenta().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            hint: Style::new(),
            key: Style::new(),
        }
    }

    /// Colored theme on a terminal, plain otherwise.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a probe outcome line for `resolve --explain`.
    pub fn format_probe(&self, provider: &str, package: &str, found: bool) -> String {
        if found {
            format!(
                "{} {} {}",
                self.success.apply_to("●"),
                self.highlight.apply_to(provider),
                self.dim.apply_to(format!("({})", package))
            )
        } else {
            format!(
                "{} {} {}",
                self.dim.apply_to("○"),
                self.dim.apply_to(provider),
                self.dim.apply_to(format!("({})", package))
            )
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
