//! Candidate repository information.

use crate::client::RepositorySummary;
use serde::Serialize;

/// A repository returned by the abandoned-project search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRepo {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Repository page on GitHub.
    pub html_url: String,

    /// Stargazer count at search time.
    pub stars: u32,

    /// Open issue count (GitHub includes open pull requests here).
    pub open_issues: u32,
}

impl From<RepositorySummary> for CandidateRepo {
    fn from(repo: RepositorySummary) -> Self {
        Self {
            owner: repo.owner.login,
            name: repo.name,
            full_name: repo.full_name,
            html_url: repo.html_url,
            stars: repo.stargazers_count,
            open_issues: repo.open_issues_count,
        }
    }
}
