//! Integration tests for the command-line binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("bootstrap"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("development environment"))
        .stdout(predicate::str::contains("--travis"))
        .stdout(predicate::str::contains("--skip-preamble"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("bootstrap"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_flag() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("bootstrap"));
    cmd.arg("--yes");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
    Ok(())
}

#[test]
fn cli_rejects_positional_platform() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("bootstrap"));
    cmd.arg("Ubuntu");
    cmd.assert().failure();
    Ok(())
}
