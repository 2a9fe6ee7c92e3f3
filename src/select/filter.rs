//! Release filter configuration
//!
//! This module provides the ReleaseFilter struct that decides which
//! parsed versions take part in selection.

use semver::Version;

/// Filter applied to parsed release versions before selection
#[derive(Debug, Clone, Default)]
pub struct ReleaseFilter {
    /// Drop versions with a pre-release component
    pub stable_only: bool,
}

impl ReleaseFilter {
    /// Create a new ReleaseFilter that keeps every version
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether pre-release versions are dropped
    pub fn with_stable_only(mut self, stable_only: bool) -> Self {
        self.stable_only = stable_only;
        self
    }

    /// Check if a version should take part in selection
    pub fn accepts(&self, version: &Version) -> bool {
        !(self.stable_only && !version.pre.is_empty())
    }

    /// Keep only accepted versions
    pub fn apply(&self, versions: Vec<Version>) -> Vec<Version> {
        versions.into_iter().filter(|v| self.accepts(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_everything() {
        let filter = ReleaseFilter::new();
        assert!(filter.accepts(&Version::parse("1.0.0").unwrap()));
        assert!(filter.accepts(&Version::parse("1.0.0-alpha.1").unwrap()));
    }

    #[test]
    fn test_stable_only_rejects_prerelease() {
        let filter = ReleaseFilter::new().with_stable_only(true);
        assert!(filter.accepts(&Version::parse("1.0.0").unwrap()));
        assert!(filter.accepts(&Version::parse("1.0.0+build.1").unwrap()));
        assert!(!filter.accepts(&Version::parse("1.0.0-rc.1").unwrap()));
    }

    #[test]
    fn test_apply() {
        let filter = ReleaseFilter::new().with_stable_only(true);
        let versions = vec![
            Version::parse("2.0.0-beta").unwrap(),
            Version::parse("1.9.0").unwrap(),
        ];
        assert_eq!(filter.apply(versions), vec![Version::new(1, 9, 0)]);
    }
}
