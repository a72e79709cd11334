//! Profile installation.
//!
//! - [`ExecutionPlan`] - the concrete commands for one run
//! - [`Installer`] - confirmation, prep commands, and the final install

pub mod plan;
pub mod runner;

pub use plan::{install_command, ExecutionPlan};
pub use runner::{Installer, RunOutcome, CONFIRM_PROMPT_KEY};
