//! Repository list loading
//!
//! The input file holds one `owner/name,min_version` record per line.
//! Lines that do not have that shape are skipped, which also drops a
//! `repository,min_version` header line.

use crate::domain::RepositoryQuery;
use crate::error::InputError;
use crate::select::parse_release_tag;
use std::path::Path;
use tracing::trace;

/// Read and parse the repository list at `path`
pub fn load_queries(path: &Path) -> Result<Vec<RepositoryQuery>, InputError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| InputError::read_error(path, e))?;
    Ok(parse_queries(&content))
}

/// Parse every well-formed record, in input order
pub fn parse_queries(raw: &str) -> Vec<RepositoryQuery> {
    raw.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let query = parse_query_line(line);
            if query.is_none() {
                trace!(line = index + 1, "skipping malformed input line");
            }
            query
        })
        .collect()
}

/// Parse a single `owner/name,min_version` record
pub fn parse_query_line(line: &str) -> Option<RepositoryQuery> {
    let fields: Vec<&str> = line.split(',').collect();
    let [repository, min_version] = fields.as_slice() else {
        return None;
    };

    let parts: Vec<&str> = repository.split('/').map(str::trim).collect();
    let [owner, name] = parts.as_slice() else {
        return None;
    };
    if owner.is_empty() || name.is_empty() {
        return None;
    }

    let floor = parse_release_tag(min_version)?;
    Some(RepositoryQuery::new(*owner, *name, floor))
}
