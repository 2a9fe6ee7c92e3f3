//! Latest-per-line selection
//!
//! Given an unordered set of versions and a floor, keep the highest version
//! of every `major.minor` line at or above the floor, newest line first.
//! Versions are compared by semver precedence, so build metadata never
//! decides whether a version meets the floor or wins its line.

use crate::domain::VersionLine;
use semver::Version;
use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Select the latest version of each release line at or above `floor`
///
/// The floor is inclusive. It bounds candidates only and never seeds a line
/// on its own. The result holds one version per line, sorted descending by
/// line; an empty result is returned when nothing qualifies. Among versions
/// of equal precedence the first one seen is kept.
pub fn select_latest_per_line(versions: &[Version], floor: &Version) -> Vec<Version> {
    select_latest_per_line_iter(versions.iter().cloned(), floor)
}

/// Owned-iterator form of [`select_latest_per_line`]
pub fn select_latest_per_line_iter<I>(versions: I, floor: &Version) -> Vec<Version>
where
    I: IntoIterator<Item = Version>,
{
    let latest = versions
        .into_iter()
        .filter(|version| version.cmp_precedence(floor) != Ordering::Less)
        .fold(BTreeMap::<VersionLine, Version>::new(), |mut lines, version| {
            match lines.entry(VersionLine::of(&version)) {
                Entry::Vacant(slot) => {
                    slot.insert(version);
                }
                Entry::Occupied(mut slot) => {
                    if version.cmp_precedence(slot.get()) == Ordering::Greater {
                        slot.insert(version);
                    }
                }
            }
            lines
        });

    latest.into_values().rev().collect()
}
