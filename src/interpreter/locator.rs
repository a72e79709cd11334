//! Interpreter candidate probing.

use crate::error::{BootstrapError, Result};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::{CandidateTemplate, RuntimeVersion};

/// Resolve every template and keep the commands that answer `--version`.
///
/// Order is preserved, so earlier (more specific) templates are preferred.
/// Each candidate is probed exactly once. A failed probe's output is shown
/// to the user and the candidate is dropped.
pub fn locate(
    templates: &[CandidateTemplate],
    version: RuntimeVersion,
    runner: &dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Vec<String> {
    let mut working = Vec::new();

    for template in templates {
        let command = template.resolve(version);
        let probe = format!("{} --version", command);

        match runner.run(&probe) {
            Ok(result) if result.success => {
                tracing::debug!("Interpreter candidate `{}` works", command);
                working.push(command);
            }
            Ok(result) => {
                tracing::debug!(
                    "Interpreter candidate `{}` failed with {:?}",
                    command,
                    result.exit_code
                );
                let output = result.combined_output();
                if output.is_empty() {
                    ui.message(&format!("`{}` failed", probe));
                } else {
                    ui.message(&output);
                }
            }
            Err(e) => {
                tracing::debug!("Interpreter candidate `{}` could not start", command);
                ui.message(&e.to_string());
            }
        }
    }

    working
}

/// Pick the preferred interpreter command, failing if none works.
pub fn first_interpreter(
    templates: &[CandidateTemplate],
    version: RuntimeVersion,
    runner: &dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<String> {
    locate(templates, version, runner, ui)
        .into_iter()
        .next()
        .ok_or_else(|| BootstrapError::NoInterpreter {
            tried: templates
                .iter()
                .map(|t| t.resolve(version))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    fn templates(sources: &[&str]) -> Vec<CandidateTemplate> {
        sources
            .iter()
            .map(|s| CandidateTemplate::parse(s).unwrap())
            .collect()
    }

    #[test]
    fn keeps_working_candidates_in_order() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let found = locate(
            &templates(&["python{major}.{minor}", "python{major}", "python"]),
            RuntimeVersion::new(3, 11),
            &runner,
            &mut ui,
        );

        assert_eq!(found, vec!["python3.11", "python3", "python"]);
        assert_eq!(
            runner.commands(),
            vec![
                "python3.11 --version",
                "python3 --version",
                "python --version"
            ]
        );
    }

    #[test]
    fn failed_probe_is_dropped_and_reported() {
        let runner = MockRunner::new();
        runner.fail("python3.11 --version", "python3.11: command not found");
        let mut ui = MockUI::new();

        let found = locate(
            &templates(&["python{major}.{minor}", "python{major}"]),
            RuntimeVersion::new(3, 11),
            &runner,
            &mut ui,
        );

        assert_eq!(found, vec!["python3"]);
        assert!(ui.has_message("python3.11: command not found"));
    }

    #[test]
    fn silent_failed_probe_is_still_reported() {
        let runner = MockRunner::new();
        runner.fail("python3.11 --version", "");
        let mut ui = MockUI::new();

        let found = locate(
            &templates(&["python{major}.{minor}", "python{major}"]),
            RuntimeVersion::new(3, 11),
            &runner,
            &mut ui,
        );

        assert_eq!(found, vec!["python3"]);
        assert!(ui.has_message("`python3.11 --version` failed"));
    }

    #[test]
    fn spawn_error_is_dropped_and_reported() {
        let runner = MockRunner::new();
        runner.spawn_error("py -3.11 --version", "no shell");
        let mut ui = MockUI::new();

        let found = locate(
            &templates(&["py -{major}.{minor}"]),
            RuntimeVersion::new(3, 11),
            &runner,
            &mut ui,
        );

        assert!(found.is_empty());
        assert!(ui.has_message("py -3.11 --version"));
    }

    #[test]
    fn first_interpreter_prefers_second_when_first_fails() {
        let runner = MockRunner::new();
        runner.fail("python3.9 --version", "not found");
        let mut ui = MockUI::new();

        let chosen = first_interpreter(
            &templates(&["python{major}.{minor}", "python{major}"]),
            RuntimeVersion::new(3, 9),
            &runner,
            &mut ui,
        )
        .unwrap();

        assert_eq!(chosen, "python3");
    }

    #[test]
    fn first_interpreter_fails_when_all_probes_fail() {
        let runner = MockRunner::new();
        runner.fail("python2.7 --version", "not found");
        runner.fail("python2 --version", "not found");
        let mut ui = MockUI::new();

        let err = first_interpreter(
            &templates(&["python{major}.{minor}", "python{major}"]),
            RuntimeVersion::new(2, 7),
            &runner,
            &mut ui,
        )
        .unwrap_err();

        match err {
            BootstrapError::NoInterpreter { tried } => {
                assert_eq!(tried, "python2.7, python2");
            }
            other => panic!("Expected NoInterpreter, got {:?}", other),
        }
    }

    #[test]
    fn empty_template_list_finds_nothing() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        let found = locate(&[], RuntimeVersion::new(3, 12), &runner, &mut ui);
        assert!(found.is_empty());
        assert!(runner.commands().is_empty());
    }
}
