//! Per-repository activity lookups: last commit and active forks.

mod fork;

pub use fork::{ForkCandidate, ForkCriteria};

use crate::client::{CommitListing, ForkListing, ForkRecord, GitHubApi};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info_span, warn, Instrument};

/// Fetches the author date of the most recent commit in `owner/repo`.
///
/// Returns `None` when the repository has no commits, the newest commit has
/// no author date, or the request fails. Failures are logged.
pub async fn get_last_commit_date<A>(api: &A, owner: &str, repo: &str) -> Option<DateTime<Utc>>
where
    A: GitHubApi + ?Sized,
{
    let span = info_span!("last_commit", repo = %format!("{owner}/{repo}"));

    async {
        let commits = match api
            .list_commits(owner, repo, &CommitListing { per_page: 1 })
            .await
        {
            Ok(commits) => commits,
            Err(e) => {
                warn!(error = %e, "Error fetching commits for {owner}/{repo}");
                return None;
            }
        };

        let date = commits.first().and_then(|commit| commit.author_date());
        if date.is_none() {
            debug!("No dated commits found");
        }
        date
    }
    .instrument(span)
    .await
}

/// Finds the most-starred active fork of `owner/repo`.
///
/// Inspects the `criteria.sample_size` newest forks. Returns `None` when no
/// fork qualifies or the request fails. Failures are logged.
pub async fn find_active_fork<A>(
    api: &A,
    owner: &str,
    repo: &str,
    criteria: &ForkCriteria,
    now: DateTime<Utc>,
) -> Option<ForkCandidate>
where
    A: GitHubApi + ?Sized,
{
    let span = info_span!("active_fork", repo = %format!("{owner}/{repo}"));

    async {
        let listing = ForkListing {
            sort: "newest".to_string(),
            per_page: criteria.sample_size,
        };

        match api.list_forks(owner, repo, &listing).await {
            Ok(forks) => {
                debug!(count = forks.len(), "Fetched forks");
                select_active_fork(forks, criteria, now)
            }
            Err(e) => {
                warn!(error = %e, "Error fetching forks for {owner}/{repo}");
                None
            }
        }
    }
    .instrument(span)
    .await
}

/// Picks the fork with the most stars among those that qualify.
///
/// A fork qualifies when it was pushed to no earlier than
/// `criteria.window_days` before `now` and has at least `criteria.min_stars`
/// stars. Forks without a push timestamp never qualify. On equal star counts
/// the earlier fork in `forks` wins.
pub fn select_active_fork(
    forks: impl IntoIterator<Item = ForkRecord>,
    criteria: &ForkCriteria,
    now: DateTime<Utc>,
) -> Option<ForkCandidate> {
    let cutoff = now - Duration::days(i64::from(criteria.window_days));

    forks
        .into_iter()
        .filter_map(|fork| {
            let pushed_at = fork.pushed_at?;
            (pushed_at >= cutoff && fork.stargazers_count >= criteria.min_stars).then(|| {
                ForkCandidate {
                    full_name: fork.full_name,
                    html_url: fork.html_url,
                    pushed_at,
                    stars: fork.stargazers_count,
                }
            })
        })
        .fold(None, |best: Option<ForkCandidate>, fork| match best {
            Some(best) if best.stars >= fork.stars => Some(best),
            _ => Some(fork),
        })
}
