//! Resolution results and the aggregated report
//!
//! A failed lookup keeps its failure kind internally; the historical
//! "Not Found" sentinel only appears at the display boundary, so callers
//! that care can still tell a missing package from a network failure.

use super::LibraryDeclaration;
use crate::error::MetadataError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for any version that could not be resolved
pub const NOT_FOUND: &str = "Not Found";

/// Why a single lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// The repository has no metadata document for this coordinate
    NotFound,
    /// Transport-level failure
    Network,
    /// The request exceeded the configured timeout
    Timeout,
    /// Unexpected HTTP status
    Http(u16),
    /// The metadata document could not be decoded
    Decode,
    /// The run was cancelled before this item was fetched
    Cancelled,
}

impl FailureKind {
    /// Human-readable label for verbose output
    pub fn label(&self) -> String {
        match self {
            FailureKind::NotFound => "not found".to_string(),
            FailureKind::Network => "network error".to_string(),
            FailureKind::Timeout => "timeout".to_string(),
            FailureKind::Http(status) => format!("http {}", status),
            FailureKind::Decode => "invalid metadata".to_string(),
            FailureKind::Cancelled => "cancelled".to_string(),
        }
    }
}

impl From<&MetadataError> for FailureKind {
    fn from(err: &MetadataError) -> Self {
        match err {
            MetadataError::NotFound { .. } => FailureKind::NotFound,
            MetadataError::Network { .. } => FailureKind::Network,
            MetadataError::Timeout { .. } => FailureKind::Timeout,
            MetadataError::Http { status, .. } => FailureKind::Http(*status),
            MetadataError::Decode { .. } => FailureKind::Decode,
        }
    }
}

/// Outcome of one latest-version lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedVersion {
    /// The latest published version reported by the repository
    Found(String),
    /// The lookup failed; the kind says how
    Failed(FailureKind),
}

impl ResolvedVersion {
    /// Returns true if a version was resolved
    pub fn is_found(&self) -> bool {
        matches!(self, ResolvedVersion::Found(_))
    }

    /// The resolved version, or the display sentinel for failures
    pub fn latest_version(&self) -> &str {
        match self {
            ResolvedVersion::Found(version) => version,
            ResolvedVersion::Failed(_) => NOT_FOUND,
        }
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.latest_version())
    }
}

/// One row of the final report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResult {
    /// The declaration this row answers for
    pub declaration: LibraryDeclaration,
    /// The metadata document that was (or would have been) queried
    pub metadata_url: String,
    /// The lookup outcome
    pub resolved: ResolvedVersion,
}

impl VersionResult {
    /// Creates a new result row
    pub fn new(
        declaration: LibraryDeclaration,
        metadata_url: impl Into<String>,
        resolved: ResolvedVersion,
    ) -> Self {
        Self {
            declaration,
            metadata_url: metadata_url.into(),
            resolved,
        }
    }

    /// The resolved version, or the display sentinel for failures
    pub fn latest_version(&self) -> &str {
        self.resolved.latest_version()
    }
}

/// The aggregated report for one build script, rows in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// One row per declaration, in first-seen order
    pub results: Vec<VersionResult>,
    /// Whether the run was cancelled before all items were fetched
    pub cancelled: bool,
}

impl CheckReport {
    /// Creates a new report
    pub fn new(results: Vec<VersionResult>, cancelled: bool) -> Self {
        Self { results, cancelled }
    }

    /// Total number of rows
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the report has no rows
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of rows with a resolved version
    pub fn resolved_count(&self) -> usize {
        self.results.iter().filter(|r| r.resolved.is_found()).count()
    }

    /// Number of rows that failed to resolve
    pub fn failed_count(&self) -> usize {
        self.len() - self.resolved_count()
    }
}
