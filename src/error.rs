//! Error types for bootstrap operations.
//!
//! This module defines [`BootstrapError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Failures that end the run (no interpreter, failed install) are
//!   `BootstrapError` variants and propagate to `main`
//! - Failures the installer recovers from (probe and prep command failures)
//!   never become errors; they are reported through the UI
//! - Use `anyhow::Error` (via `BootstrapError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Failed to parse the profile registry.
    #[error("Failed to parse profiles at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// An interpreter candidate template is malformed.
    #[error("Invalid interpreter template '{template}': {message}")]
    InvalidTemplate { template: String, message: String },

    /// No interpreter candidate answered its version check.
    #[error("No usable Python interpreter found (tried: {tried})")]
    NoInterpreter { tried: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
