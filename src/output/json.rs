//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of selection results
//! - Per-repository errors alongside the results

use crate::domain::RepositoryReport;
use crate::orchestrator::{OrchestratorError, OrchestratorResult};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    /// Per-repository results
    repositories: Vec<JsonRepository>,
    /// Errors encountered
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<JsonError>,
}

/// JSON representation of a repository report
#[derive(Serialize)]
struct JsonRepository {
    /// `owner/name`
    repository: String,
    /// Minimum version requested
    floor: String,
    /// Selected versions, newest line first
    versions: Vec<String>,
    /// Number of tags returned by the source (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    fetched_tags: Option<usize>,
}

/// JSON representation of a failed repository
#[derive(Serialize)]
struct JsonError {
    repository: String,
    message: String,
}

impl JsonFormatter {
    fn report_to_json(&self, report: &RepositoryReport) -> JsonRepository {
        JsonRepository {
            repository: report.full_name(),
            floor: report.floor.to_string(),
            versions: report.versions.iter().map(|v| v.to_string()).collect(),
            fetched_tags: (self.verbosity == Verbosity::Verbose).then_some(report.fetched_tags),
        }
    }

    fn error_to_json(error: &OrchestratorError) -> JsonError {
        match error {
            OrchestratorError::FetchFailed {
                repository,
                message,
            } => JsonError {
                repository: repository.clone(),
                message: message.clone(),
            },
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            repositories: result
                .reports
                .iter()
                .map(|r| self.report_to_json(r))
                .collect(),
            errors: result.errors.iter().map(Self::error_to_json).collect(),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RepositoryQuery;
    use semver::Version;

    fn report() -> RepositoryReport {
        let query = RepositoryQuery::new("prometheus", "prometheus", Version::new(2, 2, 0));
        RepositoryReport::new(
            &query,
            vec![Version::new(2, 3, 1), Version::new(2, 2, 1)],
            10,
        )
    }

    fn render(formatter: &JsonFormatter, result: &OrchestratorResult) -> serde_json::Value {
        let mut out = Vec::new();
        formatter.format(result, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_json_structure() {
        let result = OrchestratorResult {
            reports: vec![report()],
            errors: Vec::new(),
        };
        let json = render(&JsonFormatter::new(Verbosity::Normal), &result);

        let repos = json["repositories"].as_array().unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0]["repository"], "prometheus/prometheus");
        assert_eq!(repos[0]["floor"], "2.2.0");
        assert_eq!(repos[0]["versions"], serde_json::json!(["2.3.1", "2.2.1"]));
        assert!(repos[0].get("fetched_tags").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_json_verbose_includes_tag_count() {
        let result = OrchestratorResult {
            reports: vec![report()],
            errors: Vec::new(),
        };
        let json = render(&JsonFormatter::new(Verbosity::Verbose), &result);
        assert_eq!(json["repositories"][0]["fetched_tags"], 10);
    }

    #[test]
    fn test_json_errors() {
        let result = OrchestratorResult {
            reports: Vec::new(),
            errors: vec![OrchestratorError::FetchFailed {
                repository: "golang/go".to_string(),
                message: "timeout".to_string(),
            }],
        };
        let json = render(&JsonFormatter::new(Verbosity::Normal), &result);

        assert!(json["repositories"].as_array().unwrap().is_empty());
        assert_eq!(json["errors"][0]["repository"], "golang/go");
        assert_eq!(json["errors"][0]["message"], "timeout");
    }
}
