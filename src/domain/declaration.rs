//! Dependency declaration extracted from the build script

use super::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One dependency declaration as it appeared in the build script
///
/// `text` is the verbatim quoted literal (`group:artifact:version` as
/// written), kept for display. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryDeclaration {
    /// The coordinate literal exactly as written in the script
    pub text: String,
    /// The configuration keyword the declaration was attached to
    pub configuration: String,
    /// The decomposed coordinate
    pub coordinate: Coordinate,
}

impl LibraryDeclaration {
    /// Creates a new declaration
    pub fn new(
        text: impl Into<String>,
        configuration: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            text: text.into(),
            configuration: configuration.into(),
            coordinate,
        }
    }
}

impl fmt::Display for LibraryDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
