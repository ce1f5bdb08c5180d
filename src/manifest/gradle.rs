//! Gradle build script scanner
//!
//! Handles the conventional string-notation shorthand:
//! - implementation 'group:artifact:version'
//! - implementation "group:artifact:version"
//! - implementation('group:artifact:version')
//!
//! Everything else (comments, plugin blocks, repository blocks, map
//! notation, variable interpolation) is skipped, not an error.

use crate::domain::{Coordinate, LibraryDeclaration};
use crate::error::CoordinateError;
use crate::manifest::ScannerConfig;
use regex::Regex;
use std::sync::LazyLock;

// String notation dependency: <keyword> 'group:artifact:version'
// Accepts either quote type and the parenthesized call form. The literal
// must have the full three-field shape; the version field may carry extra
// colons (classifier suffixes).
static DEP_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(\w+)\s*[\(\s]*['"]([^:'"]+:[^:'"]+:[^'"]+)['"]"#).unwrap()
});

/// Scanner for build.gradle / build.gradle.kts text
#[derive(Debug, Clone, Default)]
pub struct GradleScanner {
    config: ScannerConfig,
}

/// Everything one scan produced
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Declarations in first-seen order, duplicates preserved
    pub declarations: Vec<LibraryDeclaration>,
    /// Literals that matched the shape but had no usable coordinate
    pub dropped: Vec<DroppedLiteral>,
}

/// A matched literal that could not be decomposed into a coordinate
#[derive(Debug, Clone)]
pub struct DroppedLiteral {
    /// The literal as written
    pub literal: String,
    /// Why it was dropped
    pub error: CoordinateError,
}

impl GradleScanner {
    /// Creates a scanner with the given configuration
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    /// Extracts dependency declarations from build script text
    ///
    /// Order matches the source text; duplicate declarations stay separate
    /// entries. Lines that do not match the shorthand are ignored.
    pub fn extract_declarations(&self, manifest: &str) -> Vec<LibraryDeclaration> {
        self.scan(manifest).declarations
    }

    /// Like [`extract_declarations`](Self::extract_declarations), but also
    /// reports literals that were dropped for lacking a usable coordinate
    pub fn scan(&self, manifest: &str) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        for line in manifest.lines() {
            let trimmed = line.trim();

            // Skip empty lines and comments
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            let Some(caps) = DEP_STRING.captures(line) else {
                continue;
            };

            let configuration = &caps[1];
            if !self.config.is_recognized(configuration) {
                continue;
            }

            let literal = &caps[2];
            match Coordinate::parse(literal) {
                Ok(coordinate) => outcome.declarations.push(LibraryDeclaration::new(
                    literal,
                    configuration,
                    coordinate,
                )),
                Err(error) => outcome.dropped.push(DroppedLiteral {
                    literal: literal.to_string(),
                    error,
                }),
            }
        }

        outcome
    }
}
