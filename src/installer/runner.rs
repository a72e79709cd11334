//! Profile execution.
//!
//! A run moves through a fixed sequence:
//!
//! 1. resolve the interpreter and build the [`ExecutionPlan`]
//! 2. show the preamble and the commands, then wait for `yes` or `no`
//!    (skipped with `--skip-preamble`)
//! 3. run every prep command; failures are reported and the run goes on
//! 4. run the install command; a failure ends the run with an error

use crate::error::{BootstrapError, Result};
use crate::interpreter::{first_interpreter, CandidateTemplate, RuntimeVersion};
use crate::registry::Profile;
use crate::shell::CommandRunner;
use crate::ui::{Prompt, UserInterface};

use super::ExecutionPlan;

/// Key of the confirmation prompt.
pub const CONFIRM_PROMPT_KEY: &str = "confirm";

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every command ran and the install succeeded.
    Completed,
    /// The user answered `no`; nothing ran.
    Declined,
}

/// Runs one profile's commands.
pub struct Installer<'a> {
    interpreters: &'a [CandidateTemplate],
    version: RuntimeVersion,
    runner: &'a dyn CommandRunner,
    ui: &'a mut dyn UserInterface,
}

impl<'a> Installer<'a> {
    /// Create an installer for the given runtime.
    pub fn new(
        interpreters: &'a [CandidateTemplate],
        version: RuntimeVersion,
        runner: &'a dyn CommandRunner,
        ui: &'a mut dyn UserInterface,
    ) -> Self {
        Self {
            interpreters,
            version,
            runner,
            ui,
        }
    }

    /// Build the plan for `profile`.
    ///
    /// Probes the interpreter candidates, so this fails with
    /// [`BootstrapError::NoInterpreter`] before anything is installed.
    pub fn plan(&mut self, profile: &Profile) -> Result<ExecutionPlan> {
        let interpreter =
            first_interpreter(self.interpreters, self.version, self.runner, &mut *self.ui)?;
        Ok(ExecutionPlan::new(profile, self.version, &interpreter))
    }

    /// Run `profile`, asking for confirmation unless `skip_preamble` is set.
    pub fn run(&mut self, profile: &Profile, skip_preamble: bool) -> Result<RunOutcome> {
        tracing::debug!(
            "Running profile {} for Python {}",
            profile.name,
            self.version
        );

        let plan = self.plan(profile)?;

        if !skip_preamble && !self.confirm(profile, &plan)? {
            tracing::debug!("User declined profile {}", profile.name);
            return Ok(RunOutcome::Declined);
        }

        for command in &plan.prep {
            self.run_prep(command);
        }

        self.run_install(&plan.install)?;
        self.ui.success("Installation complete");

        Ok(RunOutcome::Completed)
    }

    /// Show the preamble and pending commands, then loop until the answer is
    /// exactly `yes` or `no`.
    fn confirm(&mut self, profile: &Profile, plan: &ExecutionPlan) -> Result<bool> {
        if let Some(preamble) = &profile.preamble {
            self.ui.message(preamble.trim_end());
        }

        self.ui.show_header("The following commands will be run:");
        for command in plan.commands() {
            self.ui.show_command(command);
        }

        let prompt = Prompt::new(CONFIRM_PROMPT_KEY, "Continue? (yes/no)");
        loop {
            match self.ui.prompt(&prompt)?.as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => self.ui.message("Please answer 'yes' or 'no'."),
            }
        }
    }

    fn run_prep(&mut self, command: &str) {
        self.ui.show_command(command);

        match self.runner.run(command) {
            Ok(result) if result.success => {
                let output = result.combined_output();
                if !output.is_empty() {
                    self.ui.message(&output);
                }
            }
            Ok(result) => {
                tracing::warn!(
                    "Prep command `{}` exited with {:?}",
                    command,
                    result.exit_code
                );
                let output = result.combined_output();
                if output.is_empty() {
                    self.ui.error(&format!("`{}` failed", command));
                } else {
                    self.ui.error(&output);
                }
            }
            Err(e) => {
                tracing::warn!("Prep command `{}` could not start", command);
                self.ui.error(&e.to_string());
            }
        }
    }

    fn run_install(&mut self, command: &str) -> Result<()> {
        self.ui.show_command(command);

        let result = self.runner.run(command)?;
        let output = result.combined_output();
        if !output.is_empty() {
            self.ui.message(&output);
        }

        if result.success {
            Ok(())
        } else {
            Err(BootstrapError::CommandFailed {
                command: command.to_string(),
                code: result.exit_code,
                output,
            })
        }
    }
}
