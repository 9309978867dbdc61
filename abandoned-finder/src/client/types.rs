//! Wire types for the GitHub REST responses the finder consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /search/repositories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    /// Search qualifiers, e.g. `language:python stars:>=1000`.
    pub q: String,

    /// Sort key.
    pub sort: String,

    /// Sort direction.
    pub order: String,

    /// Results per page (1-100).
    pub per_page: u8,

    /// 1-based page number.
    pub page: u32,
}

/// Response body of the repository search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    /// Total number of matches reported by GitHub.
    pub total_count: u64,

    /// Whether GitHub timed out before collecting every match.
    #[serde(default)]
    pub incomplete_results: bool,

    /// Repositories on this page.
    #[serde(default)]
    pub items: Vec<RepositorySummary>,
}

/// Owner section of a repository summary.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerSummary {
    pub login: String,
}

/// A repository as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySummary {
    pub owner: OwnerSummary,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub open_issues_count: u32,
}

/// Query parameters for `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Serialize)]
pub struct CommitListing {
    pub per_page: u8,
}

/// A single entry from the commit listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRecord {
    pub commit: CommitDetail,
}

/// Git-level commit information.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub author: Option<CommitSignature>,
}

/// Author or committer signature on a commit.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSignature {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl CommitRecord {
    /// Returns the author date of this commit, if GitHub supplied one.
    pub fn author_date(&self) -> Option<DateTime<Utc>> {
        self.commit.author.as_ref().and_then(|author| author.date)
    }
}

/// Query parameters for `GET /repos/{owner}/{repo}/forks`.
#[derive(Debug, Clone, Serialize)]
pub struct ForkListing {
    pub sort: String,
    pub per_page: u8,
}

/// A fork as returned by the fork listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ForkRecord {
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stargazers_count: u32,
}

/// Which rate-limit bucket a request draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateResource {
    /// The search API (30 requests/minute when authenticated).
    Search,
    /// Everything else under `/repos`.
    Core,
}
