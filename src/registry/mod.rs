//! Profile registry.
//!
//! The registry is an explicit, immutable list of named [`Profile`]s plus the
//! ordered interpreter candidate templates. It is built once at startup from
//! the document embedded in the binary and handed to whatever needs it.
//!
//! # Example
//!
//! ```
//! use bootstrap::registry::ProfileRegistry;
//!
//! let registry = ProfileRegistry::from_yaml(
//!     "interpreters: [python3]\nprofiles:\n  - name: Ubuntu\n",
//!     "inline.yml",
//! )
//! .unwrap();
//!
//! assert!(registry.select("Ubuntu").is_some());
//! assert!(registry.select("ubuntu").is_none());
//! ```

pub mod builtin;
pub mod profile;

pub use profile::{Profile, DEFAULT_INSTALL_SUFFIX};

use serde::Deserialize;
use std::collections::HashSet;

use crate::error::{BootstrapError, Result};
use crate::interpreter::CandidateTemplate;

/// Name of the profile forced by `--travis`.
pub const CI_PROFILE: &str = "Travis";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryDocument {
    interpreters: Vec<CandidateTemplate>,
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// Immutable set of platform profiles.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
    interpreters: Vec<CandidateTemplate>,
}

impl ProfileRegistry {
    /// Build a registry from parts, rejecting empty or duplicate names.
    pub fn new(profiles: Vec<Profile>, interpreters: Vec<CandidateTemplate>) -> Result<Self> {
        let mut seen = HashSet::new();
        for profile in &profiles {
            if profile.name.is_empty() {
                return Err(BootstrapError::ConfigParseError {
                    path: "<registry>".into(),
                    message: "profile with empty name".to_string(),
                });
            }
            if !seen.insert(profile.name.as_str()) {
                return Err(BootstrapError::ConfigParseError {
                    path: "<registry>".into(),
                    message: format!("duplicate profile '{}'", profile.name),
                });
            }
        }

        Ok(Self {
            profiles,
            interpreters,
        })
    }

    /// Parse a registry document.
    pub fn from_yaml(content: &str, path: &str) -> Result<Self> {
        let doc: RegistryDocument =
            serde_yaml::from_str(content).map_err(|e| BootstrapError::ConfigParseError {
                path: path.into(),
                message: e.to_string(),
            })?;

        Self::new(doc.profiles, doc.interpreters).map_err(|e| match e {
            BootstrapError::ConfigParseError { message, .. } => {
                BootstrapError::ConfigParseError {
                    path: path.into(),
                    message,
                }
            }
            other => other,
        })
    }

    /// Look up the profile whose name equals `platform` exactly.
    pub fn select(&self, platform: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == platform)
    }

    /// All profiles, in declaration order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Interpreter candidate templates, most preferred first.
    pub fn interpreters(&self) -> &[CandidateTemplate] {
        &self.interpreters
    }
}
