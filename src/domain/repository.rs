//! Repository query structures

use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A repository to check, together with the minimum version of interest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryQuery {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Versions below this floor are ignored
    pub floor: Version,
}

impl RepositoryQuery {
    /// Creates a new repository query
    pub fn new(owner: impl Into<String>, name: impl Into<String>, floor: Version) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            floor,
        }
    }

    /// Returns `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} (>= {})", self.owner, self.name, self.floor)
    }
}
