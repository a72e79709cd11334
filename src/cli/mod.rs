//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Platform selection and installer wiring

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{execute, CliOutcome, DECLINED_EXIT_CODE};
