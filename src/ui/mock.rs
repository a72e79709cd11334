//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Prompt answers are queued per key.
//!
//! # Example
//!
//! ```
//! use bootstrap::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("confirm", vec!["maybe", "yes"]);
//!
//! let prompt = Prompt::new("confirm", "Continue?");
//! assert_eq!(ui.prompt(&prompt).unwrap(), "maybe");
//! assert_eq!(ui.prompt(&prompt).unwrap(), "yes");
//! assert_eq!(ui.prompts_shown().len(), 2);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{BootstrapError, Result};

use super::{Prompt, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions. A prompt whose queue is empty (or was never
/// configured) fails with an `UnexpectedEof` I/O error, the same way the
/// terminal UI behaves when stdin closes.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    commands_shown: Vec<String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue responses for a prompt key, returned in order.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all commands listed before confirmation.
    pub fn commands_shown(&self) -> &[String] {
        &self.commands_shown
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_command(&mut self, command: &str) {
        self.commands_shown.push(command.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        self.prompt_queues
            .get_mut(&prompt.key)
            .and_then(|queue| queue.pop_front())
            .ok_or_else(|| {
                BootstrapError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("no answer queued for prompt '{}'", prompt.key),
                ))
            })
    }
}
