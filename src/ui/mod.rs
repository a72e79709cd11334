//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use bootstrap::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Installing build dependencies");
//! assert!(ui.has_message("build dependencies"));
//! ```

pub mod mock;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use prompts::prompt_line;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, BootstrapTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message verbatim.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header line.
    fn show_header(&mut self, title: &str);

    /// Show a command that is about to run.
    fn show_command(&mut self, command: &str);

    /// Show a prompt and return the line the user typed.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;
}

/// A free-text prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests).
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    /// Create a prompt.
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_new_sets_fields() {
        let prompt = Prompt::new("confirm", "Continue?");
        assert_eq!(prompt.key, "confirm");
        assert_eq!(prompt.question, "Continue?");
    }
}
