//! Built-in profiles embedded at compile time.

use crate::error::Result;

use super::ProfileRegistry;

/// Path of the embedded document, used in parse errors.
pub const BUILTIN_PATH: &str = "src/registry/profiles.yml";

/// Embedded profile document.
static PROFILES_YAML: &str = include_str!("profiles.yml");

/// Load the built-in registry.
pub fn load() -> Result<ProfileRegistry> {
    ProfileRegistry::from_yaml(PROFILES_YAML, BUILTIN_PATH)
}
