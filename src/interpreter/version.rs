//! Runtime version detection.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BootstrapError, Result};
use crate::shell::CommandRunner;

/// Commands asked for `--version` to learn which Python the machine runs.
pub const REFERENCE_COMMANDS: &[&str] = &["python3", "python", "py"];

/// Regex for the `Python X.Y` banner printed by `--version`.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python\s+(\d+)\.(\d+)").expect("VERSION_REGEX must compile")
});

/// Major/minor version of the target Python runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
}

impl RuntimeVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Extract the version from `--version` output such as `Python 3.11.4`.
    pub fn parse(output: &str) -> Option<Self> {
        let caps = VERSION_REGEX.captures(output)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        Some(Self::new(major, minor))
    }

    /// Ask each reference command for its version; the first parseable
    /// answer wins.
    ///
    /// Python 2 prints its version on stderr, so both streams are searched.
    pub fn detect(runner: &dyn CommandRunner) -> Result<Self> {
        for command in REFERENCE_COMMANDS {
            let probe = format!("{} --version", command);
            match runner.run(&probe) {
                Ok(result) if result.success => {
                    if let Some(version) = Self::parse(&result.combined_output()) {
                        tracing::debug!("Runtime version {} from `{}`", version, probe);
                        return Ok(version);
                    }
                    tracing::debug!("Unrecognised output from `{}`", probe);
                }
                Ok(_) => tracing::debug!("`{}` exited unsuccessfully", probe),
                Err(e) => tracing::debug!("`{}` could not start: {}", probe, e),
            }
        }

        Err(BootstrapError::NoInterpreter {
            tried: REFERENCE_COMMANDS.join(", "),
        })
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    #[test]
    fn parses_three_part_version() {
        assert_eq!(
            RuntimeVersion::parse("Python 3.11.4"),
            Some(RuntimeVersion::new(3, 11))
        );
    }

    #[test]
    fn parses_python2_style_output() {
        assert_eq!(
            RuntimeVersion::parse("Python 2.7.18\n"),
            Some(RuntimeVersion::new(2, 7))
        );
    }

    #[test]
    fn parses_prerelease_version() {
        assert_eq!(
            RuntimeVersion::parse("Python 3.13.0rc1"),
            Some(RuntimeVersion::new(3, 13))
        );
    }

    #[test]
    fn rejects_unrelated_output() {
        assert_eq!(RuntimeVersion::parse("command not found"), None);
        assert_eq!(RuntimeVersion::parse(""), None);
    }

    #[test]
    fn displays_major_dot_minor() {
        assert_eq!(RuntimeVersion::new(3, 9).to_string(), "3.9");
    }

    #[test]
    fn detect_uses_first_reference_command() {
        let runner = MockRunner::new();
        runner.succeed("python3 --version", "Python 3.12.1\n");

        let version = RuntimeVersion::detect(&runner).unwrap();

        assert_eq!(version, RuntimeVersion::new(3, 12));
        assert_eq!(runner.commands(), vec!["python3 --version"]);
    }

    #[test]
    fn detect_falls_back_to_python() {
        let runner = MockRunner::new();
        runner.fail("python3 --version", "python3: not found");
        runner.succeed("python --version", "Python 2.7.18");

        let version = RuntimeVersion::detect(&runner).unwrap();

        assert_eq!(version, RuntimeVersion::new(2, 7));
    }

    #[test]
    fn detect_skips_unparseable_output() {
        let runner = MockRunner::new();
        runner.succeed("python3 --version", "");
        runner.succeed("python --version", "Python 3.10.0");

        assert_eq!(
            RuntimeVersion::detect(&runner).unwrap(),
            RuntimeVersion::new(3, 10)
        );
    }

    #[test]
    fn detect_fails_when_nothing_answers() {
        let runner = MockRunner::new();
        runner.fail("python3 --version", "not found");
        runner.spawn_error("python --version", "not found");
        runner.fail("py --version", "not found");

        let err = RuntimeVersion::detect(&runner).unwrap_err();

        match err {
            BootstrapError::NoInterpreter { tried } => assert_eq!(tried, "python3, python, py"),
            other => panic!("Expected NoInterpreter, got {:?}", other),
        }
    }

    #[test]
    fn detect_falls_back_to_py_launcher() {
        let runner = MockRunner::new();
        runner.fail("python3 --version", "not recognized");
        runner.fail("python --version", "not recognized");
        runner.succeed("py --version", "Python 3.12.4\r\n");

        let version = RuntimeVersion::detect(&runner).unwrap();

        assert_eq!(version, RuntimeVersion::new(3, 12));
        assert_eq!(
            runner.commands(),
            vec!["python3 --version", "python --version", "py --version"]
        );
    }
}
