//! patchlines - latest release per version line library
//!
//! This library provides the core functionality for checking which
//! releases of GitHub repositories are current:
//! - Loading `owner/name,min_version` records
//! - Fetching release tags from the GitHub API
//! - Selecting the latest version of every major.minor line above a floor
//! - Formatting results as text or JSON

pub mod cli;
pub mod domain;
pub mod error;
pub mod input;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod select;
pub mod telemetry;
