//! Release check orchestrator
//!
//! This module provides:
//! - Workflow coordination: fetch → parse tags → filter → select
//! - Sequential processing in input order
//! - Per-repository error recovery

use crate::cli::CliArgs;
use crate::domain::{RepositoryQuery, RepositoryReport};
use crate::error::{AppError, RegistryError};
use crate::progress::Progress;
use crate::registry::{GitHubReleases, HttpClient, ReleaseSource};
use crate::select::{parse_release_tags, select_latest_per_line_iter, ReleaseFilter};
use tracing::{debug, info};

/// Orchestrator for the release check workflow
pub struct Orchestrator {
    /// Where release tags come from
    source: Box<dyn ReleaseSource>,
    /// Filter applied to parsed versions
    filter: ReleaseFilter,
    /// Whether to draw a progress bar
    show_progress: bool,
}

/// Result of running the orchestrator
#[derive(Debug, Default)]
pub struct OrchestratorResult {
    /// Reports of successfully processed repositories, in input order
    pub reports: Vec<RepositoryReport>,
    /// Repositories that could not be processed
    pub errors: Vec<OrchestratorError>,
}

impl OrchestratorResult {
    /// Returns true if every repository was processed
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Errors that can occur for a single repository
#[derive(Debug)]
pub enum OrchestratorError {
    /// Failed to fetch releases
    FetchFailed { repository: String, message: String },
}

impl std::fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorError::FetchFailed {
                repository,
                message,
            } => write!(
                f,
                "Error in retrieving list releases for {}: {}",
                repository, message
            ),
        }
    }
}

impl std::error::Error for OrchestratorError {}

impl Orchestrator {
    /// Create an orchestrator talking to GitHub, configured from CLI arguments
    pub fn new(args: &CliArgs) -> Result<Self, AppError> {
        let config = args.fetch_config()?;
        let client = HttpClient::with_timeout(config.timeout)?;
        let source = GitHubReleases::with_base_url(client, &config.api_url)
            .with_per_page(config.per_page);
        let filter = ReleaseFilter::new().with_stable_only(args.stable);

        Ok(Self::with_source(Box::new(source), filter).with_progress(!args.quiet))
    }

    /// Create an orchestrator with a custom release source (for testing)
    pub fn with_source(source: Box<dyn ReleaseSource>, filter: ReleaseFilter) -> Self {
        Self {
            source,
            filter,
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Process every query, one at a time, in input order
    pub async fn run(&self, queries: &[RepositoryQuery]) -> OrchestratorResult {
        let mut progress = Progress::new(self.show_progress);
        let mut result = OrchestratorResult::default();

        info!(
            repositories = queries.len(),
            source = self.source.source_name(),
            "checking releases"
        );
        progress.start(queries.len() as u64, "Fetching releases");

        for query in queries {
            progress.set_message(&query.full_name());

            match self.check(query).await {
                Ok(report) => {
                    if report.is_empty() {
                        debug!(query = %query, "no release meets the minimum version");
                    }
                    result.reports.push(report);
                }
                Err(e) => {
                    debug!(repository = %query.full_name(), error = %e, "fetch failed");
                    result.errors.push(OrchestratorError::FetchFailed {
                        repository: query.full_name(),
                        message: e.to_string(),
                    });
                }
            }

            progress.inc();
        }
        progress.finish_and_clear();

        result
    }

    /// Fetch, parse and select for one repository
    pub async fn check(&self, query: &RepositoryQuery) -> Result<RepositoryReport, RegistryError> {
        let tags = self
            .source
            .fetch_release_tags(&query.owner, &query.name)
            .await?;

        let versions = self.filter.apply(parse_release_tags(&tags));
        let selected = select_latest_per_line_iter(versions, &query.floor);

        debug!(
            repository = %query.full_name(),
            tags = tags.len(),
            selected = selected.len(),
            "selected latest versions"
        );

        Ok(RepositoryReport::new(query, selected, tags.len()))
    }
}
