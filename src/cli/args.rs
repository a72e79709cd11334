//! CLI argument definitions.
//!
//! The entry point is the [`Cli`] struct, parsed with clap's derive macros.

use clap::Parser;

/// Bootstrap - one-command development environment setup.
#[derive(Debug, Clone, Parser)]
#[command(name = "bootstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the Travis CI profile regardless of the host platform
    #[arg(long)]
    pub travis: bool,

    /// Run without showing the preamble or asking for confirmation
    #[arg(long)]
    pub skip_preamble: bool,
}
