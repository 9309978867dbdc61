//! Orchestrates an abandoned-project scan.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::client::{GitHubApi, OctocrabApi};
use crate::discovery::search_repositories;
use crate::report::{analyze, persist, AnalysisResult};
use crate::summary::RunSummary;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Outcome of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Analyzed repositories, sorted by descending score.
    pub results: Vec<AnalysisResult>,

    /// Run counters.
    pub summary: RunSummary,

    /// Where the CSV was written, if anything was written.
    pub output: Option<PathBuf>,
}

/// Runs search, analysis, and persistence against a [`GitHubApi`].
pub struct Runner<A = OctocrabApi> {
    config: RunnerConfig,
    api: A,
}

impl Runner<OctocrabApi> {
    /// Builds a runner with an octocrab client from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let api = OctocrabApi::new(config.client())?;
        Ok(Self { config, api })
    }
}

impl<A: GitHubApi> Runner<A> {
    /// Builds a runner around an existing API implementation.
    pub fn with_api(config: RunnerConfig, api: A) -> Self {
        Self { config, api }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Executes the full flow relative to the current time.
    pub async fn run(&self) -> RunReport {
        self.run_at(Utc::now()).await
    }

    /// Executes the full flow relative to `now`.
    ///
    /// Never fails: a failed search yields an empty report, skipped
    /// candidates are counted, and a failed write is logged.
    pub async fn run_at(&self, now: DateTime<Utc>) -> RunReport {
        if !self.config.client().is_authenticated() {
            warn!("No GitHub token provided. Rate limits will be lower.");
            warn!("Set GITHUB_TOKEN environment variable or pass --token flag.");
        }

        let filter = self.config.filter();
        let candidates = search_repositories(&self.api, filter, now.date_naive()).await;

        if candidates.is_empty() {
            info!("No repositories found");
            return RunReport::default();
        }

        let (results, summary) =
            analyze(&self.api, &candidates, self.config.analysis(), now).await;

        let output = self.config.output();
        let written = match persist(&results, output) {
            Ok(0) => None,
            Ok(_) => Some(output.to_path_buf()),
            Err(e) => {
                error!(path = %output.display(), error = %e, "Failed to save results");
                None
            }
        };

        RunReport {
            results,
            summary,
            output: written,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SearchFilter;
    use crate::testing::{fixed_now, repo_summary, FakeApi};
    use chrono::Duration as ChronoDuration;
    use std::time::Duration;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> RunnerConfig {
        RunnerConfig::new(
            SearchFilter::new(1000, 365, 50),
            dir.path().join("abandoned_projects.csv"),
        )
        .with_pause(Duration::ZERO)
    }

    #[tokio::test]
    async fn search_failure_completes_with_empty_report() {
        let temp = TempDir::new().unwrap();
        let runner = Runner::with_api(config(&temp), FakeApi::new().with_search_failure());

        let report = runner.run_at(fixed_now()).await;

        assert!(report.results.is_empty());
        assert!(report.output.is_none());
        assert!(!temp.path().join("abandoned_projects.csv").exists());
    }

    #[tokio::test]
    async fn all_candidates_skipped_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let api = FakeApi::new()
            .with_search_results(vec![repo_summary("a", "empty", 2000, 0)])
            .with_commit_dates("a/empty", Vec::new());
        let runner = Runner::with_api(config(&temp), api);

        let report = runner.run_at(fixed_now()).await;

        assert_eq!(report.summary.candidates_found, 1);
        assert_eq!(report.summary.skipped, 1);
        assert!(report.output.is_none());
    }

    #[tokio::test]
    async fn writes_csv_for_results() {
        let temp = TempDir::new().unwrap();
        let api = FakeApi::new()
            .with_search_results(vec![repo_summary("a", "old", 2000, 0)])
            .with_commit_dates("a/old", vec![fixed_now() - ChronoDuration::days(400)])
            .with_forks("a/old", Vec::new());
        let runner = Runner::with_api(config(&temp), api);

        let report = runner.run_at(fixed_now()).await;

        let path = temp.path().join("abandoned_projects.csv");
        assert_eq!(report.output.as_deref(), Some(path.as_path()));
        assert_eq!(std::fs::read_to_string(path).unwrap().lines().count(), 2);
    }

    #[tokio::test]
    async fn write_failure_is_absorbed() {
        let temp = TempDir::new().unwrap();
        let config = RunnerConfig::new(
            SearchFilter::new(1000, 365, 50),
            temp.path().join("missing").join("out.csv"),
        )
        .with_pause(Duration::ZERO);
        let api = FakeApi::new()
            .with_search_results(vec![repo_summary("a", "old", 2000, 0)])
            .with_commit_dates("a/old", vec![fixed_now() - ChronoDuration::days(400)])
            .with_forks("a/old", Vec::new());

        let report = Runner::with_api(config, api).run_at(fixed_now()).await;

        assert_eq!(report.results.len(), 1);
        assert!(report.output.is_none());
    }
}
