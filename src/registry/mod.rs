//! Release sources for fetching repository release tags
//!
//! This module provides:
//! - HTTP client shared foundation
//! - GitHub Releases API adapter

mod client;
mod github;

pub use client::HttpClient;
pub use github::{GitHubReleases, DEFAULT_API_URL, DEFAULT_PER_PAGE};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for release sources
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the source name used in diagnostics
    fn source_name(&self) -> &'static str;

    /// Fetch the raw release tags of `owner/name`
    async fn fetch_release_tags(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Vec<String>, RegistryError>;
}
