//! Interpreter candidate templates.
//!
//! A template such as `python{major}.{minor}` names a command that may start
//! the right Python on the current machine. Templates are parsed once, when
//! the registry is built, so a typo in a placeholder is a load error rather
//! than a surprising command line at run time.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};

use crate::error::{BootstrapError, Result};

use super::RuntimeVersion;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Major,
    Minor,
}

/// A validated interpreter command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl CandidateTemplate {
    /// Parse a template, accepting only `{major}` and `{minor}` placeholders.
    ///
    /// # Example
    ///
    /// ```
    /// use bootstrap::interpreter::{CandidateTemplate, RuntimeVersion};
    ///
    /// let template = CandidateTemplate::parse("py -{major}.{minor}").unwrap();
    /// let version = RuntimeVersion::new(3, 12);
    /// assert_eq!(template.resolve(version), "py -3.12");
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let invalid = |message: &str| BootstrapError::InvalidTemplate {
            template: source.to_string(),
            message: message.to_string(),
        };

        if source.trim().is_empty() {
            return Err(invalid("template is empty"));
        }

        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find(['{', '}']) {
            if rest[open..].starts_with('}') {
                return Err(invalid("unmatched '}'"));
            }
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| invalid("unclosed '{'"))?;
            match &after[..close] {
                "major" => segments.push(Segment::Major),
                "minor" => segments.push(Segment::Minor),
                other => {
                    return Err(invalid(&format!("unknown placeholder '{{{}}}'", other)));
                }
            }
            rest = &after[close + 1..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Substitute a runtime version into the template.
    pub fn resolve(&self, version: RuntimeVersion) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.clone(),
                Segment::Major => version.major.to_string(),
                Segment::Minor => version.minor.to_string(),
            })
            .collect()
    }
}

impl fmt::Display for CandidateTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for CandidateTemplate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let source = String::deserialize(deserializer)?;
        CandidateTemplate::parse(&source).map_err(de::Error::custom)
    }
}
