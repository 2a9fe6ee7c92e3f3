//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Status code to RegistryError mapping
//! - JSON body decoding
//!
//! Requests are sent exactly once; a failure is reported to the caller.

use crate::error::RegistryError;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("patchlines/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, RegistryError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                RegistryError::network_error(
                    "",
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and map unsuccessful statuses to errors
    pub async fn get_with_context(
        &self,
        url: &str,
        accept: &str,
        repository: &str,
        registry: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RegistryError::timeout(repository, registry)
                } else {
                    RegistryError::network_error(repository, registry, e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if is_rate_limited(&response) {
            return Err(RegistryError::rate_limit_exceeded(registry));
        }

        if status == StatusCode::NOT_FOUND {
            return Err(RegistryError::repository_not_found(repository, registry));
        }

        Err(RegistryError::network_error(
            repository,
            registry,
            format!("HTTP {}", status),
        ))
    }

    /// Perform a GET request and decode the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        accept: &str,
        repository: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let response = self
            .get_with_context(url, accept, repository, registry)
            .await?;

        response.json::<T>().await.map_err(|e| {
            RegistryError::invalid_response(
                repository,
                registry,
                format!("failed to parse JSON: {}", e),
            )
        })
    }
}

/// 429, or a 403 that reports an exhausted quota
fn is_rate_limited(response: &reqwest::Response) -> bool {
    match response.status() {
        StatusCode::TOO_MANY_REQUESTS => true,
        StatusCode::FORBIDDEN => response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|remaining| remaining.trim() == "0"),
        _ => false,
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
    fn test_http_client_with_config() {
        let client = HttpClient::with_config(Duration::from_secs(60), "test-agent/1.0");
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_client_with_timeout() {
        let client = HttpClient::with_timeout(Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
        assert!(DEFAULT_USER_AGENT.starts_with("patchlines/"));
    }

    #[tokio::test]
    async fn test_get_with_context_maps_server_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/boom")
            .with_status(500)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let url = format!("{}/boom", server.url());
        let result = client
            .get_with_context(&url, "application/json", "a/b", "GitHub")
            .await;

        mock.assert_async().await;
        match result {
            Err(RegistryError::NetworkError { message, .. }) => assert!(message.contains("500")),
            other => panic!("unexpected result: {:?}", other.map(|r| r.status())),
        }
    }

    #[tokio::test]
    async fn test_get_with_context_forbidden_without_quota_header() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/private")
            .with_status(403)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let url = format!("{}/private", server.url());
        let result = client
            .get_with_context(&url, "application/json", "a/b", "GitHub")
            .await;

        assert!(matches!(result, Err(RegistryError::NetworkError { .. })));
    }

    #[tokio::test]
    async fn test_get_json_invalid_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/bad")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let url = format!("{}/bad", server.url());
        let result: Result<Vec<String>, _> = client
            .get_json(&url, "application/json", "a/b", "GitHub")
            .await;

        assert!(matches!(result, Err(RegistryError::InvalidResponse { .. })));
    }

    #[tokio::test]
    async fn test_get_with_context_connection_refused() {
        let client = HttpClient::with_timeout(Duration::from_secs(2)).unwrap();
        // Port 9 (discard) is not expected to accept HTTP connections locally
        let result = client
            .get_with_context("http://127.0.0.1:9/", "application/json", "a/b", "GitHub")
            .await;

        assert!(matches!(
            result,
            Err(RegistryError::NetworkError { .. }) | Err(RegistryError::Timeout { .. })
        ));
    }
}
