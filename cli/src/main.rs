//! CLI for the Abandoned Project Finder.
//!
//! Searches GitHub for popular repositories without recent commits, looks for
//! active forks, and writes a ranked CSV report.

use abandoned_finder::{
    load_settings, print_summary, resolve_token, FinderSettings, RunReport, Runner,
    RunnerConfig, RunnerError,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Abandoned Project Finder - Find popular repositories nobody commits to anymore.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub API token (or set GITHUB_TOKEN env var).
    #[arg(long)]
    token: Option<String>,

    /// Minimum stars (default: 1000).
    #[arg(long)]
    min_stars: Option<u32>,

    /// Minimum days since last commit (default: 365).
    #[arg(long)]
    days_abandoned: Option<u32>,

    /// Maximum number of results (default: 50).
    #[arg(long)]
    max_results: Option<u32>,

    /// Output CSV file (default: abandoned_projects.csv).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Language to search (default: python).
    #[arg(long)]
    language: Option<String>,

    /// Minimum stars for a fork to count as active (default: 100).
    #[arg(long)]
    min_fork_stars: Option<u32>,

    /// Pause after each analyzed repository, in milliseconds (default: 500).
    #[arg(long)]
    pause_ms: Option<u64>,

    /// GitHub API root, e.g. for GitHub Enterprise.
    #[arg(long)]
    api_url: Option<String>,

    /// TOML file with default values for the options above.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunReport, RunnerError> {
    let token = resolve_token(args.token.clone());
    let settings = merge_settings(args)?;
    let config = RunnerConfig::from_settings(&settings, token)?;

    println!("{}", "=".repeat(60));
    println!("GitHub Abandoned Project Finder ({})", settings.language);
    println!("{}", "=".repeat(60));

    let runner = Runner::new(config)?;
    Ok(runner.run().await)
}

/// Applies command-line flags on top of the config file (or the defaults).
fn merge_settings(args: Args) -> Result<FinderSettings, RunnerError> {
    let mut settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => FinderSettings::default(),
    };

    if let Some(min_stars) = args.min_stars {
        settings.min_stars = min_stars;
    }
    if let Some(days) = args.days_abandoned {
        settings.days_abandoned = days;
    }
    if let Some(max_results) = args.max_results {
        settings.max_results = max_results;
    }
    if let Some(output) = args.output {
        settings.output = output;
    }
    if let Some(language) = args.language {
        settings.language = language;
    }
    if let Some(min_fork_stars) = args.min_fork_stars {
        settings.min_fork_stars = min_fork_stars;
    }
    if let Some(pause_ms) = args.pause_ms {
        settings.pause_ms = pause_ms;
    }
    if args.api_url.is_some() {
        settings.api_url = args.api_url;
    }

    Ok(settings)
}

/// Prints the top candidates and the run counters.
fn print_report(report: &RunReport) {
    if let Some(path) = &report.output {
        println!("\nResults saved to {}", path.display());
    }

    print_summary(&report.results);

    let summary = &report.summary;
    println!("\nSummary:");
    println!("  Candidates found: {}", summary.candidates_found);
    println!("  Analyzed: {}", summary.analyzed);
    println!("  Skipped: {}", summary.skipped);
    println!("  Active forks found: {}", summary.active_forks_found);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "find-abandoned",
            "--min-stars",
            "250",
            "--language",
            "rust",
            "--output",
            "out.csv",
        ]);

        let settings = merge_settings(args).unwrap();

        assert_eq!(settings.min_stars, 250);
        assert_eq!(settings.language, "rust");
        assert_eq!(settings.output, PathBuf::from("out.csv"));
        assert_eq!(settings.days_abandoned, 365);
        assert_eq!(settings.max_results, 50);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args::parse_from(["find-abandoned", "--config", "/nonexistent/finder.toml"]);

        assert!(merge_settings(args).is_err());
    }
}
