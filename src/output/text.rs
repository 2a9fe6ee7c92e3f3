//! Text output formatter for human-readable display
//!
//! Each processed repository produces exactly one line:
//! `latest versions of <owner>/<name>: [<v1> <v2> ...]`

use crate::domain::RepositoryReport;
use crate::orchestrator::{OrchestratorError, OrchestratorResult};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Build the display line for one repository
pub fn format_result_line(report: &RepositoryReport) -> String {
    let versions: Vec<String> = report.versions.iter().map(|v| v.to_string()).collect();
    format!(
        "latest versions of {}/{}: [{}]",
        report.owner,
        report.name,
        versions.join(" ")
    )
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors in diagnostics
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for report in &result.reports {
            writeln!(writer, "{}", format_result_line(report))?;
        }
        Ok(())
    }

    fn format_errors(
        &self,
        errors: &[OrchestratorError],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        for error in errors {
            let line = error.to_string();
            if self.color {
                writeln!(writer, "{}", line.red())?;
            } else {
                writeln!(writer, "{}", line)?;
            }
        }

        if self.verbosity == Verbosity::Verbose && !errors.is_empty() {
            writeln!(writer, "{} repositories skipped", errors.len())?;
        }

        Ok(())
    }
}
