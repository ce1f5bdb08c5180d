//! Library coordinate parsing and validation

use crate::error::CoordinateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A library coordinate in the repository's addressing scheme
///
/// `group` and `artifact` are mandatory, non-empty and never contain a
/// colon (the field separator). The declared version is optional: it is
/// what the build script pins, and plays no part in metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Group identifier (dot-separated namespace)
    pub group: String,
    /// Artifact identifier
    pub artifact: String,
    /// Version as declared in the build script, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_version: Option<String>,
}

impl Coordinate {
    /// Creates a coordinate from explicit fields, validating the invariants
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        declared_version: Option<String>,
    ) -> Result<Self, CoordinateError> {
        let group = group.into();
        let artifact = artifact.into();

        let literal = match &declared_version {
            Some(v) => format!("{}:{}:{}", group, artifact, v),
            None => format!("{}:{}", group, artifact),
        };

        if group.trim().is_empty() {
            return Err(CoordinateError::invalid(&literal, "group must not be empty"));
        }
        if artifact.trim().is_empty() {
            return Err(CoordinateError::invalid(
                &literal,
                "artifact must not be empty",
            ));
        }
        if group.contains(':') || artifact.contains(':') {
            return Err(CoordinateError::invalid(
                &literal,
                "group and artifact must not contain ':'",
            ));
        }

        Ok(Self {
            group: group.trim().to_string(),
            artifact: artifact.trim().to_string(),
            declared_version,
        })
    }

    /// Parses a `group:artifact:version` literal
    ///
    /// The version field is optional (`group:artifact` is accepted); extra
    /// colons beyond the second stay part of the version (classifier
    /// suffixes). Fewer than two fields is an error.
    pub fn parse(literal: &str) -> Result<Self, CoordinateError> {
        let mut fields = literal.splitn(3, ':');
        let group = fields.next().unwrap_or_default().trim();
        let artifact = fields.next().unwrap_or_default().trim();
        let version = fields
            .next()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from);

        if group.is_empty() {
            return Err(CoordinateError::invalid(literal, "group must not be empty"));
        }
        if artifact.is_empty() {
            return Err(CoordinateError::invalid(
                literal,
                "artifact must not be empty",
            ));
        }

        Ok(Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            declared_version: version,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.declared_version {
            Some(version) => write!(f, "{}:{}:{}", self.group, self.artifact, version),
            None => write!(f, "{}:{}", self.group, self.artifact),
        }
    }
}
