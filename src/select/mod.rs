//! Version selection logic
//!
//! This module provides:
//! - Release tag normalization and parsing into semantic versions
//! - Release filtering (pre-release exclusion)
//! - Latest-per-line selection against a minimum version floor

mod filter;
mod selector;
mod tag;

pub use filter::ReleaseFilter;
pub use selector::{select_latest_per_line, select_latest_per_line_iter};
pub use tag::{normalize_tag, parse_release_tag, parse_release_tags};
