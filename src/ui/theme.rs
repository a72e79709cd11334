//! Visual theme and styling.

use console::Style;

/// Terminal styles for bootstrap output.
#[derive(Debug, Clone)]
pub struct BootstrapTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for commands about to run (dim italic).
    pub command: Style,
}

impl Default for BootstrapTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BootstrapTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            header: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a command in a pending-commands listing.
    pub fn format_command(&self, command: &str) -> String {
        format!("  $ {}", self.command.apply_to(command))
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
