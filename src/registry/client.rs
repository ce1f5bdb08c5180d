//! HTTP client foundation
//!
//! A thin reqwest wrapper with configurable timeout and User-Agent.
//! Lookups are single-attempt: any failure is reported to the caller,
//! which degrades that one row instead of retrying.

use crate::error::MetadataError;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for metadata requests (10 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("depver/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, MetadataError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, MetadataError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, MetadataError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                MetadataError::network("", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and return the response body as text
    ///
    /// Maps the failure modes onto the metadata error taxonomy: 404 becomes
    /// NotFound, other non-2xx statuses become Http, request timeouts
    /// become Timeout, everything else transport-level becomes Network.
    pub async fn get_text(&self, url: &str) -> Result<String, MetadataError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MetadataError::timeout(url)
            } else {
                MetadataError::network(url, e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MetadataError::not_found(url));
        }
        if !status.is_success() {
            return Err(MetadataError::http(url, status.as_u16()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                MetadataError::timeout(url)
            } else {
                MetadataError::network(url, e.to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_client_with_timeout() {
        let client = HttpClient::with_timeout(Duration::from_secs(30));
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_client_with_config() {
        let client = HttpClient::with_config(Duration::from_secs(60), "test-agent/1.0");
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(10));
        assert!(DEFAULT_USER_AGENT.starts_with("depver/"));
    }

    #[tokio::test]
    async fn test_get_text_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/doc.xml")
            .with_status(200)
            .with_body("<metadata/>")
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let url = format!("{}/doc.xml", server.url());
        let body = client.get_text(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, "<metadata/>");
    }

    #[tokio::test]
    async fn test_get_text_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing.xml")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let url = format!("{}/missing.xml", server.url());
        let err = client.get_text(&url).await.unwrap_err();
        assert!(matches!(err, MetadataError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_text_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/broken.xml")
            .with_status(500)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let url = format!("{}/broken.xml", server.url());
        let err = client.get_text(&url).await.unwrap_err();
        assert!(matches!(err, MetadataError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_get_text_connection_refused() {
        // Port 1 is never listening
        let client = HttpClient::new().unwrap();
        let err = client.get_text("http://127.0.0.1:1/doc.xml").await.unwrap_err();
        assert!(matches!(err, MetadataError::Network { .. }));
    }
}
