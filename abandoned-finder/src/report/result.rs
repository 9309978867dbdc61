//! Analysis result types.

use crate::activity::ForkCandidate;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Date format used in the CSV report.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A fully analyzed abandoned repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Repository name.
    pub name: String,

    /// Repository owner.
    pub owner: String,

    /// Repository page on GitHub.
    pub url: String,

    /// Stargazer count.
    pub stars: u32,

    /// Author date of the newest commit.
    pub last_commit: DateTime<Utc>,

    /// Whole days between the newest commit and the analysis time.
    pub days_abandoned: u64,

    /// Open issue count.
    pub open_issues: u32,

    /// Abandonment score, rounded to two decimals.
    pub score: f64,

    /// Most-starred active fork, if any.
    pub active_fork: Option<ForkCandidate>,
}

impl AnalysisResult {
    /// Full repository name in "owner/name" format.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// One CSV row. Field order is the column order.
#[derive(Debug, Serialize)]
pub(crate) struct CsvRow<'a> {
    name: &'a str,
    owner: &'a str,
    url: &'a str,
    stars: u32,
    last_commit: String,
    days_abandoned: u64,
    open_issues: u32,
    score: f64,
    active_fork_name: Option<&'a str>,
    active_fork_url: Option<&'a str>,
    active_fork_stars: Option<u32>,
    active_fork_last_commit: Option<String>,
}

impl<'a> From<&'a AnalysisResult> for CsvRow<'a> {
    fn from(result: &'a AnalysisResult) -> Self {
        let fork = result.active_fork.as_ref();
        Self {
            name: &result.name,
            owner: &result.owner,
            url: &result.url,
            stars: result.stars,
            last_commit: result.last_commit.format(DATE_FORMAT).to_string(),
            days_abandoned: result.days_abandoned,
            open_issues: result.open_issues,
            score: result.score,
            active_fork_name: fork.map(|f| f.full_name.as_str()),
            active_fork_url: fork.map(|f| f.html_url.as_str()),
            active_fork_stars: fork.map(|f| f.stars),
            active_fork_last_commit: fork.map(|f| f.pushed_at.format(DATE_FORMAT).to_string()),
        }
    }
}
