//! Platform profile records.

use serde::Deserialize;

/// Install argument used when a profile does not set one: the current
/// directory.
pub const DEFAULT_INSTALL_SUFFIX: &str = ".";

fn default_install_suffix() -> String {
    DEFAULT_INSTALL_SUFFIX.to_string()
}

/// How to prepare and install on one platform or CI target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Platform identifier this profile answers to (exact match).
    pub name: String,

    /// Notice shown before the confirmation prompt.
    #[serde(default)]
    pub preamble: Option<String>,

    /// Prep commands for every runtime version.
    #[serde(default)]
    pub prep: Vec<String>,

    /// Prep commands added when the runtime major version is 2.
    #[serde(default)]
    pub prep_py2: Vec<String>,

    /// Prep commands added when the runtime major version is 3.
    #[serde(default)]
    pub prep_py3: Vec<String>,

    /// Argument passed to `pip install`.
    #[serde(default = "default_install_suffix")]
    pub install_suffix: String,
}

impl Profile {
    /// Create an empty profile with the default install suffix.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            preamble: None,
            prep: Vec::new(),
            prep_py2: Vec::new(),
            prep_py3: Vec::new(),
            install_suffix: default_install_suffix(),
        }
    }

    /// Generic prep commands followed by the list for `major`, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use bootstrap::registry::Profile;
    ///
    /// let mut profile = Profile::new("Ubuntu");
    /// profile.prep = vec!["apt-get update".into()];
    /// profile.prep_py2 = vec!["apt-get install python-dev".into()];
    /// profile.prep_py3 = vec!["apt-get install python3-dev".into()];
    ///
    /// assert_eq!(
    ///     profile.prep_commands(2),
    ///     vec!["apt-get update", "apt-get install python-dev"]
    /// );
    /// ```
    pub fn prep_commands(&self, major: u32) -> Vec<String> {
        let versioned: &[String] = match major {
            2 => &self.prep_py2,
            3 => &self.prep_py3,
            _ => &[],
        };

        self.prep.iter().chain(versioned).cloned().collect()
    }
}
