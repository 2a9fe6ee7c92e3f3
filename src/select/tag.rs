//! Release tag normalization
//!
//! Tags such as `v1.2.3` carry a single marker character before the
//! version number. It is stripped before semver parsing. Tags that still
//! fail to parse are dropped without affecting the others.

use semver::Version;
use tracing::debug;

/// Strip surrounding whitespace and one leading non-numeric marker
pub fn normalize_tag(tag: &str) -> &str {
    let tag = tag.trim();
    match tag.chars().next() {
        Some(first) if !first.is_ascii_digit() => &tag[first.len_utf8()..],
        _ => tag,
    }
}

/// Parse a release tag into a semantic version
pub fn parse_release_tag(tag: &str) -> Option<Version> {
    Version::parse(normalize_tag(tag)).ok()
}

/// Parse every tag that is a valid semantic version, in input order
pub fn parse_release_tags<S: AsRef<str>>(tags: &[S]) -> Vec<Version> {
    tags.iter()
        .filter_map(|tag| {
            let tag = tag.as_ref();
            let parsed = parse_release_tag(tag);
            if parsed.is_none() {
                debug!(tag, "ignoring tag that is not a semantic version");
            }
            parsed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_v_prefix() {
        assert_eq!(normalize_tag("v1.2.3"), "1.2.3");
    }

    #[test]
    fn test_normalize_strips_any_single_marker() {
        assert_eq!(normalize_tag("=1.2.3"), "1.2.3");
        assert_eq!(normalize_tag("V2.0.0"), "2.0.0");
    }

    #[test]
    fn test_normalize_strips_only_one_marker() {
        assert_eq!(normalize_tag("vv1.2.3"), "v1.2.3");
    }

    #[test]
    fn test_normalize_keeps_numeric_start() {
        assert_eq!(normalize_tag("1.2.3"), "1.2.3");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_tag("  v1.2.3\r"), "1.2.3");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_tag(""), "");
    }

    #[test]
    fn test_normalize_multibyte_marker() {
        assert_eq!(normalize_tag("é1.0.0"), "1.0.0");
    }

    #[test]
    fn test_parse_release_tag_valid() {
        assert_eq!(parse_release_tag("v1.10.1"), Some(Version::new(1, 10, 1)));
        assert_eq!(parse_release_tag("0.3.0"), Some(Version::new(0, 3, 0)));
    }

    #[test]
    fn test_parse_release_tag_prerelease_and_build() {
        let version = parse_release_tag("v2.0.0-rc.1+build.7").unwrap();
        assert_eq!(version.major, 2);
        assert_eq!(version.pre.as_str(), "rc.1");
        assert_eq!(version.build.as_str(), "build.7");
    }

    #[test]
    fn test_parse_release_tag_invalid() {
        assert_eq!(parse_release_tag(""), None);
        assert_eq!(parse_release_tag("v"), None);
        assert_eq!(parse_release_tag("v1.2"), None);
        assert_eq!(parse_release_tag("release-1.2.3"), None);
        assert_eq!(parse_release_tag("nightly"), None);
    }

    #[test]
    fn test_parse_release_tags_drops_invalid_only() {
        let tags = vec!["v1.0.0", "garbage", "v1.1.0", "v1.2", "2.0.0"];
        assert_eq!(
            parse_release_tags(&tags),
            vec![
                Version::new(1, 0, 0),
                Version::new(1, 1, 0),
                Version::new(2, 0, 0)
            ]
        );
    }

    #[test]
    fn test_parse_release_tags_owned_strings() {
        let tags = vec!["v3.1.4".to_string()];
        assert_eq!(parse_release_tags(&tags), vec![Version::new(3, 1, 4)]);
    }

    #[test]
    fn test_parse_release_tags_empty() {
        let tags: Vec<String> = Vec::new();
        assert!(parse_release_tags(&tags).is_empty());
    }
}
