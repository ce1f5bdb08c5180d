//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading the build script
//! - CoordinateError: Issues with a parsed dependency coordinate
//! - MetadataError: Issues with fetching or decoding repository metadata

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to reading the build script
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Build script not found
    #[error("build script not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read build script
    #[error("failed to read build script {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to a parsed dependency coordinate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Coordinate is missing a mandatory field or contains an invalid one
    #[error("invalid coordinate '{literal}': {reason}")]
    Invalid { literal: String, reason: String },
}

/// Errors related to fetching or decoding a metadata document
///
/// These never reach the caller of the resolution loop: each one is
/// collapsed into the corresponding per-row failure kind.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Metadata document does not exist (HTTP 404)
    #[error("metadata document not found at {url}")]
    NotFound { url: String },

    /// Network request failed
    #[error("failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// Request exceeded the configured timeout
    #[error("timeout while fetching {url}")]
    Timeout { url: String },

    /// Unexpected HTTP status
    #[error("unexpected HTTP status {status} from {url}")]
    Http { url: String, status: u16 },

    /// Response body is not a usable metadata document
    #[error("invalid metadata document from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl CoordinateError {
    /// Creates a new Invalid error
    pub fn invalid(literal: impl Into<String>, reason: impl Into<String>) -> Self {
        CoordinateError::Invalid {
            literal: literal.into(),
            reason: reason.into(),
        }
    }
}

impl MetadataError {
    /// Creates a new NotFound error
    pub fn not_found(url: impl Into<String>) -> Self {
        MetadataError::NotFound { url: url.into() }
    }

    /// Creates a new Network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        MetadataError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(url: impl Into<String>) -> Self {
        MetadataError::Timeout { url: url.into() }
    }

    /// Creates a new Http error
    pub fn http(url: impl Into<String>, status: u16) -> Self {
        MetadataError::Http {
            url: url.into(),
            status,
        }
    }

    /// Creates a new Decode error
    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        MetadataError::Decode {
            url: url.into(),
            message: message.into(),
        }
    }
}
