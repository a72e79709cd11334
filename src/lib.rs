//! Bootstrap - one-command development environment setup.
//!
//! Detects the host platform, picks the matching profile of shell commands,
//! optionally asks for confirmation, then runs the prep commands and a final
//! `pip install` with the best Python interpreter found on the machine.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and top-level flow
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Execution plans and the confirm/prep/install sequence
//! - [`interpreter`] - Runtime version detection and interpreter probing
//! - [`platform`] - Host platform identification
//! - [`registry`] - Built-in platform profiles
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use bootstrap::installer::{Installer, RunOutcome};
//! use bootstrap::interpreter::RuntimeVersion;
//! use bootstrap::registry::builtin;
//! use bootstrap::shell::MockRunner;
//! use bootstrap::ui::MockUI;
//!
//! let registry = builtin::load().unwrap();
//! let runner = MockRunner::new();
//! let mut ui = MockUI::new();
//!
//! let profile = registry.select("Darwin").unwrap();
//! let mut installer = Installer::new(
//!     registry.interpreters(),
//!     RuntimeVersion::new(3, 12),
//!     &runner,
//!     &mut ui,
//! );
//! let outcome = installer.run(profile, true).unwrap();
//!
//! assert_eq!(outcome, RunOutcome::Completed);
//! assert!(runner.ran("python3.12 -m pip install ."));
//! ```

pub mod cli;
pub mod error;
pub mod installer;
pub mod interpreter;
pub mod platform;
pub mod registry;
pub mod shell;
pub mod ui;

pub use error::{BootstrapError, Result};
