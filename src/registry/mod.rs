//! Repository metadata access
//!
//! This module provides:
//! - HTTP client foundation with timeout and User-Agent
//! - Metadata URL construction from coordinates
//! - The maven-metadata.xml fetcher/decoder

mod client;
mod metadata;

pub use client::HttpClient;
pub use metadata::{metadata_url, parse_latest_version, MavenMetadataFetcher, DEFAULT_REPOSITORY_URL};

use crate::error::MetadataError;
use async_trait::async_trait;

/// Trait for latest-version lookups against a metadata document URL
///
/// The resolution loop only depends on this seam, so tests can substitute
/// a stub for the network-backed implementation.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetch the metadata document at `url` and extract the latest version
    async fn fetch_latest(&self, url: &str) -> Result<String, MetadataError>;
}
