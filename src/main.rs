//! patchlines - latest release per version line
//!
//! Reads `owner/name,min_version` records and prints, for each repository,
//! the newest release of every major.minor line at or above the minimum.

use clap::Parser;
use patchlines::cli::CliArgs;
use patchlines::input::load_queries;
use patchlines::orchestrator::Orchestrator;
use patchlines::output::{create_formatter, OutputConfig};
use patchlines::telemetry::init_tracing;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

/// Exit status when some repositories could not be fetched
///
/// clap reports usage errors with status 2, so partial failure uses 3.
const EXIT_PARTIAL_FAILURE: u8 = 3;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.log_level());

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("patchlines v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Input: {}", args.input.display());
        eprintln!("API: {}", args.api_url);
    }

    let orchestrator = Orchestrator::new(&args)?;
    let queries = load_queries(&args.input)?;

    if args.verbose {
        eprintln!("Repositories: {}", queries.len());
    }

    let result = orchestrator.run(&queries).await;

    let mut output_config = OutputConfig::from_cli(args.json, args.verbose);
    output_config.color = io::stderr().is_terminal();
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    let mut stderr = io::stderr().lock();
    formatter.format_errors(&result.errors, &mut stderr)?;

    if result.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_PARTIAL_FAILURE))
    }
}
