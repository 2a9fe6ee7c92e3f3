//! CLI argument parsing module for patchlines

use crate::error::ConfigError;
use crate::registry::{DEFAULT_API_URL, DEFAULT_PER_PAGE};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Largest page size the GitHub API accepts
const MAX_PER_PAGE: u32 = 100;

/// Parse a timeout given in whole seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

/// Report the latest release of every version line at or above a minimum version
#[derive(Parser, Debug, Clone)]
#[command(
    name = "patchlines",
    version,
    about = "Report the latest release of every major.minor line of GitHub repositories"
)]
pub struct CliArgs {
    /// Input file with one `owner/name,min_version` record per line
    pub input: PathBuf,

    /// GitHub API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Number of releases requested per repository (first page only)
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// HTTP timeout in seconds
    #[arg(long, value_parser = parse_timeout, default_value = "30")]
    pub timeout: Duration,

    /// Ignore pre-release versions
    #[arg(long)]
    pub stable: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - no progress bar, errors only
    #[arg(short, long)]
    pub quiet: bool,
}

/// Validated settings for the release fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub api_url: String,
    pub per_page: u32,
    pub timeout: Duration,
}

impl CliArgs {
    /// Build and validate the fetcher configuration
    pub fn fetch_config(&self) -> Result<FetchConfig, ConfigError> {
        let url = reqwest::Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidApiUrl {
            value: self.api_url.clone(),
            message: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidApiUrl {
                value: self.api_url.clone(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(ConfigError::InvalidPerPage {
                value: self.per_page,
            });
        }

        Ok(FetchConfig {
            api_url: self.api_url.clone(),
            per_page: self.per_page,
            timeout: self.timeout,
        })
    }

    /// Default log level when RUST_LOG is not set
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}
