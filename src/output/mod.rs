//! Output formatting for selection results
//!
//! This module provides:
//! - Text output, one `latest versions of` line per repository
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{format_result_line, TextFormatter};

use crate::orchestrator::{OrchestratorError, OrchestratorResult};
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with additional information
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether to use colors in diagnostics
    pub color: bool,
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, verbose: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let verbosity = if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            format,
            verbosity,
            color: true,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the orchestrator result
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Write one diagnostic line per failed repository
    fn format_errors(
        &self,
        errors: &[OrchestratorError],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        for error in errors {
            writeln!(writer, "{}", error)?;
        }
        Ok(())
    }
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.verbosity, config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.verbosity)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_verbosity_default() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_output_config_from_cli_json() {
        let config = OutputConfig::from_cli(true, false);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_output_config_from_cli_verbose() {
        let config = OutputConfig::from_cli(false, true);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.verbosity, Verbosity::Verbose);
    }

    #[test]
    fn test_create_formatter_json() {
        let formatter = create_formatter(OutputConfig::from_cli(true, false));
        let mut out = Vec::new();
        formatter
            .format(&OrchestratorResult::default(), &mut out)
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(json["repositories"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_default_error_lines() {
        let formatter = JsonFormatter::new(Verbosity::Normal);
        let errors = vec![OrchestratorError::FetchFailed {
            repository: "a/b".to_string(),
            message: "boom".to_string(),
        }];
        let mut out = Vec::new();
        formatter.format_errors(&errors, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error in retrieving list releases for a/b: boom\n"
        );
    }
}
