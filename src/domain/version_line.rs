//! Version line: all versions sharing a major.minor pair

use semver::Version;

/// A `major.minor` release line
///
/// Ordering is by major, then minor, which matches semver precedence
/// of the versions the line contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionLine {
    pub major: u64,
    pub minor: u64,
}

impl VersionLine {
    /// Creates a new version line
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    /// Returns the line a version belongs to
    pub fn of(version: &Version) -> Self {
        Self::new(version.major, version.minor)
    }
}
