//! Recording command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything. It
//! records every command line it is asked to run and answers from a table of
//! pre-configured results.
//!
//! # Example
//!
//! ```
//! use bootstrap::shell::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.fail("python2 --version", "python2: not found");
//!
//! assert!(runner.run("echo hi").unwrap().success);
//! assert!(!runner.run("python2 --version").unwrap().success);
//! assert_eq!(runner.commands(), vec!["echo hi", "python2 --version"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{BootstrapError, Result};

use super::{CommandResult, CommandRunner};

#[derive(Debug, Clone)]
enum Scripted {
    Result(CommandResult),
    SpawnError(String),
}

/// Command runner that records calls and returns scripted results.
///
/// Commands with no scripted result succeed with empty output.
#[derive(Debug, Default)]
pub struct MockRunner {
    scripted: RefCell<HashMap<String, Scripted>>,
    commands: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds silently.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` succeed with the given stdout.
    pub fn succeed(&self, command: &str, stdout: &str) {
        self.scripted.borrow_mut().insert(
            command.to_string(),
            Scripted::Result(CommandResult::success(stdout.to_string(), String::new())),
        );
    }

    /// Make `command` exit with code 1 and the given stderr.
    pub fn fail(&self, command: &str, stderr: &str) {
        self.scripted.borrow_mut().insert(
            command.to_string(),
            Scripted::Result(CommandResult::failure(
                Some(1),
                String::new(),
                stderr.to_string(),
            )),
        );
    }

    /// Make `command` fail to start at all.
    pub fn spawn_error(&self, command: &str, message: &str) {
        self.scripted
            .borrow_mut()
            .insert(command.to_string(), Scripted::SpawnError(message.to_string()));
    }

    /// Every command run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    /// Check whether a command was run.
    pub fn ran(&self, command: &str) -> bool {
        self.commands.borrow().iter().any(|c| c == command)
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str) -> Result<CommandResult> {
        self.commands.borrow_mut().push(command.to_string());

        match self.scripted.borrow().get(command) {
            Some(Scripted::Result(result)) => Ok(result.clone()),
            Some(Scripted::SpawnError(message)) => Err(BootstrapError::CommandFailed {
                command: command.to_string(),
                code: None,
                output: message.clone(),
            }),
            None => Ok(CommandResult::success(String::new(), String::new())),
        }
    }
}
