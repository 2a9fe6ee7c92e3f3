//! Application error types using thiserror
//!
//! Error hierarchy:
//! - InputError: Issues reading the repository list
//! - RegistryError: Issues talking to the release source
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input file related errors
    #[error(transparent)]
    Input(#[from] InputError),

    /// Release source related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to the repository list
#[derive(Error, Debug)]
pub enum InputError {
    /// Failed to read the input file
    #[error("failed to read input file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to fetching releases
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Repository not found
    #[error("repository '{repository}' not found on {registry}")]
    RepositoryNotFound {
        repository: String,
        registry: String,
    },

    /// Network request failed
    #[error("failed to fetch releases of '{repository}' from {registry}: {message}")]
    NetworkError {
        repository: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry}")]
    RateLimitExceeded { registry: String },

    /// Invalid response body
    #[error("invalid response from {registry} for '{repository}': {message}")]
    InvalidResponse {
        repository: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching releases of '{repository}' from {registry}")]
    Timeout {
        repository: String,
        registry: String,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// API base URL is not an http(s) URL
    #[error("invalid API URL '{value}': {message}")]
    InvalidApiUrl { value: String, message: String },

    /// Page size outside the range the API accepts
    #[error("invalid page size {value}: expected a value between 1 and 100")]
    InvalidPerPage { value: u32 },
}

impl InputError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl RegistryError {
    /// Creates a new RepositoryNotFound error
    pub fn repository_not_found(
        repository: impl Into<String>,
        registry: impl Into<String>,
    ) -> Self {
        RegistryError::RepositoryNotFound {
            repository: repository.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        repository: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            repository: repository.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(registry: impl Into<String>) -> Self {
        RegistryError::RateLimitExceeded {
            registry: registry.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        repository: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            repository: repository.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(repository: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            repository: repository.into(),
            registry: registry.into(),
        }
    }
}
