//! Bootstrap CLI entry point.

use std::process::ExitCode;

use bootstrap::cli::{execute, Cli};
use bootstrap::platform;
use bootstrap::registry::builtin;
use bootstrap::shell::ShellRunner;
use bootstrap::ui::{TerminalUI, UserInterface};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// `RUST_LOG` controls the level; the default only shows warnings. Logs go
/// to stderr so stdout carries nothing but command output.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bootstrap=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("Bootstrap starting with args: {:?}", cli);

    let mut ui = TerminalUI::new();

    let result = builtin::load().and_then(|registry| {
        execute(&cli, &registry, &ShellRunner, &mut ui, platform::detect)
    });

    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
