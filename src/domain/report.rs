//! Per-repository selection report

use super::RepositoryQuery;
use semver::Version;
use serde::{Deserialize, Serialize};

/// Latest version of each release line for one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryReport {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Minimum version that was requested
    pub floor: Version,
    /// Selected versions, newest line first
    pub versions: Vec<Version>,
    /// Number of release tags returned by the source
    pub fetched_tags: usize,
}

impl RepositoryReport {
    /// Creates a report for a query
    pub fn new(query: &RepositoryQuery, versions: Vec<Version>, fetched_tags: usize) -> Self {
        Self {
            owner: query.owner.clone(),
            name: query.name.clone(),
            floor: query.floor.clone(),
            versions,
            fetched_tags,
        }
    }

    /// Returns `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Returns true if no version met the floor
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
