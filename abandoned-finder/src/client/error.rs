//! API error types.

use thiserror::Error;

/// Errors returned by a [`GitHubApi`](super::GitHubApi) call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or non-success response from GitHub.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// Request failed for a reason not surfaced by octocrab.
    #[error("Request failed: {0}")]
    RequestFailed(String),
}
