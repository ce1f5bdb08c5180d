//! Maven repository metadata URL construction and decoding
//!
//! Metadata document location follows the standard repository layout:
//! `{base}/{group with dots as slashes}/{artifact}/maven-metadata.xml`.
//! Only the `versioning/latest` text node of the document is consumed.

use crate::domain::Coordinate;
use crate::error::{CoordinateError, MetadataError};
use crate::registry::{HttpClient, MetadataFetcher};
use async_trait::async_trait;
use roxmltree::Document;

/// Maven Central repository root, the default lookup target
pub const DEFAULT_REPOSITORY_URL: &str = "https://repo1.maven.org/maven2";

/// Build the metadata document URL for a coordinate
///
/// Deterministic and independent of the declared version: two coordinates
/// with the same (group, artifact) always map to the same URL, and distinct
/// (group, artifact) pairs never collide (the group's dot hierarchy becomes
/// a path hierarchy). Pure string transformation, no network access.
pub fn metadata_url(coordinate: &Coordinate, base_url: &str) -> Result<String, CoordinateError> {
    if coordinate.group.trim().is_empty() {
        return Err(CoordinateError::invalid(
            coordinate.to_string(),
            "group must not be empty",
        ));
    }
    if coordinate.artifact.trim().is_empty() {
        return Err(CoordinateError::invalid(
            coordinate.to_string(),
            "artifact must not be empty",
        ));
    }

    Ok(format!(
        "{}/{}/{}/maven-metadata.xml",
        base_url.trim_end_matches('/'),
        coordinate.group.replace('.', "/"),
        coordinate.artifact
    ))
}

/// Extract the latest version from a maven-metadata.xml body
///
/// The answer is the text of the `versioning/latest` element. Malformed
/// documents, a missing element and empty text all fail the same way.
pub fn parse_latest_version(xml: &str) -> Result<String, String> {
    let doc = Document::parse(xml).map_err(|e| e.to_string())?;

    doc.descendants()
        .find(|node| node.has_tag_name("versioning"))
        .and_then(|versioning| {
            versioning
                .children()
                .find(|node| node.has_tag_name("latest"))
        })
        .and_then(|latest| latest.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
        .ok_or_else(|| "missing versioning/latest element".to_string())
}

/// Network-backed fetcher for maven-metadata.xml documents
pub struct MavenMetadataFetcher {
    client: HttpClient,
}

impl MavenMetadataFetcher {
    /// Create a new fetcher
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetadataFetcher for MavenMetadataFetcher {
    async fn fetch_latest(&self, url: &str) -> Result<String, MetadataError> {
        let body = self.client.get_text(url).await?;
        parse_latest_version(&body).map_err(|message| MetadataError::decode(url, message))
    }
}
