//! Core domain models for patchlines
//!
//! This module contains the fundamental types used throughout the application:
//! - Repository queries read from the input file
//! - Version lines (major.minor groupings)
//! - Per-repository selection reports

mod report;
mod repository;
mod version_line;

pub use report::RepositoryReport;
pub use repository::RepositoryQuery;
pub use version_line::VersionLine;
