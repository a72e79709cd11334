//! Execution plans.

use crate::interpreter::RuntimeVersion;
use crate::registry::Profile;

/// Commands one run will execute, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    /// Prep commands (generic, then version-specific).
    pub prep: Vec<String>,
    /// The final `pip install` command.
    pub install: String,
}

impl ExecutionPlan {
    /// Build the plan for `profile` on `version`, installing with `interpreter`.
    pub fn new(profile: &Profile, version: RuntimeVersion, interpreter: &str) -> Self {
        Self {
            prep: profile.prep_commands(version.major),
            install: install_command(interpreter, &profile.install_suffix),
        }
    }

    /// Every command, prep first and install last.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.prep
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.install.as_str()))
    }
}

/// Format the package install command.
pub fn install_command(interpreter: &str, suffix: &str) -> String {
    format!("{} -m pip install {}", interpreter, suffix)
}
