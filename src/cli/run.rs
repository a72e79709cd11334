//! Top-level command flow.
//!
//! Picks the platform, selects the matching profile, and hands it to the
//! [`Installer`]. Every collaborator is passed in, so the whole flow can be
//! exercised with a mock runner and UI.

use crate::error::Result;
use crate::installer::{Installer, RunOutcome};
use crate::interpreter::RuntimeVersion;
use crate::platform::effective_platform;
use crate::registry::ProfileRegistry;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::Cli;

/// Exit code used when the user declines the confirmation prompt.
pub const DECLINED_EXIT_CODE: u8 = 1;

/// What an invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliOutcome {
    /// A profile matched and the installer ran to the given outcome.
    Ran(RunOutcome),
    /// No profile is named after this platform; nothing ran.
    NoMatchingProfile,
}

impl CliOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Ran(RunOutcome::Declined) => DECLINED_EXIT_CODE,
            Self::Ran(RunOutcome::Completed) | Self::NoMatchingProfile => 0,
        }
    }
}

/// Run the bootstrap flow for the parsed arguments.
///
/// `detect` supplies the host platform identifier and is not called when
/// `--travis` is given.
pub fn execute<D>(
    cli: &Cli,
    registry: &ProfileRegistry,
    runner: &dyn CommandRunner,
    ui: &mut dyn UserInterface,
    detect: D,
) -> Result<CliOutcome>
where
    D: FnOnce() -> String,
{
    let platform = effective_platform(cli.travis, detect);

    let Some(profile) = registry.select(&platform) else {
        tracing::debug!("No profile for platform {}", platform);
        return Ok(CliOutcome::NoMatchingProfile);
    };

    tracing::debug!("Selected profile {}", profile.name);

    let version = RuntimeVersion::detect(runner)?;
    let mut installer = Installer::new(registry.interpreters(), version, runner, ui);
    let outcome = installer.run(profile, cli.skip_preamble)?;

    Ok(CliOutcome::Ran(outcome))
}
