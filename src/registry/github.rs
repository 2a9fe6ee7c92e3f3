//! GitHub Releases API adapter
//!
//! Fetches release tags of a repository from the GitHub REST API.
//! API endpoint: https://api.github.com/repos/{owner}/{name}/releases
//!
//! Only the first page is requested and the request is unauthenticated.

use crate::error::RegistryError;
use crate::registry::{HttpClient, ReleaseSource};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// GitHub API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Releases requested per call
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Media type recommended by the GitHub REST API
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub releases adapter
pub struct GitHubReleases {
    client: HttpClient,
    base_url: String,
    per_page: u32,
}

/// Release entry from the list releases endpoint
#[derive(Debug, Deserialize)]
struct Release {
    /// Git tag the release points to
    tag_name: String,
    /// Draft releases are not published yet
    #[serde(default)]
    draft: bool,
}

impl GitHubReleases {
    /// Create a new adapter for an API base URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Set the page size of the releases request
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Build the releases URL for a repository
    fn build_url(&self, owner: &str, name: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases?per_page={}",
            self.base_url, owner, name, self.per_page
        )
    }
}

#[async_trait]
impl ReleaseSource for GitHubReleases {
    fn source_name(&self) -> &'static str {
        "GitHub"
    }

    async fn fetch_release_tags(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Vec<String>, RegistryError> {
        let repository = format!("{}/{}", owner, name);
        let url = self.build_url(owner, name);

        let releases: Vec<Release> = self
            .client
            .get_json(&url, GITHUB_ACCEPT, &repository, self.source_name())
            .await?;

        debug!(repository, count = releases.len(), "fetched releases");

        Ok(releases
            .into_iter()
            .filter(|release| !release.draft)
            .map(|release| release.tag_name)
            .collect())
    }
}
