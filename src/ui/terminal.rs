//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{prompt_line, should_use_colors, BootstrapTheme, Prompt, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: BootstrapTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            BootstrapTheme::new()
        } else {
            BootstrapTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
    }

    fn show_command(&mut self, command: &str) {
        writeln!(self.term, "{}", self.theme.format_command(command)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_line(prompt, &self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let ui = TerminalUI::new();
        drop(ui);
    }

    #[test]
    fn terminal_ui_accepts_output_without_panic() {
        let mut ui = TerminalUI::default();
        ui.message("plain");
        ui.success("done");
        ui.show_command("echo hi");
    }
}
