//! Candidate analysis.

use super::AnalysisResult;
use crate::activity::{find_active_fork, get_last_commit_date, ForkCriteria};
use crate::client::{GitHubApi, RateResource};
use crate::discovery::CandidateRepo;
use crate::rate_limit::{ensure_rate_limit, pause_between_candidates, DEFAULT_CANDIDATE_PAUSE};
use crate::score::{round_score, score};
use crate::summary::{ProcessingResult, RunSummary};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{info, info_span, Instrument};

/// Settings for the per-candidate analysis loop.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// What counts as an active fork.
    pub fork_criteria: ForkCriteria,

    /// Pause after each analyzed candidate.
    pub pause: Duration,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            fork_criteria: ForkCriteria::default(),
            pause: DEFAULT_CANDIDATE_PAUSE,
        }
    }
}

/// Analyzes candidates one at a time and returns results sorted by score.
///
/// Candidates are visited in the given order. A candidate whose last commit
/// cannot be resolved is skipped; nothing else is affected. After the loop,
/// results are stably sorted by descending score, so equal scores keep their
/// search order.
pub async fn analyze<A>(
    api: &A,
    candidates: &[CandidateRepo],
    options: &AnalysisOptions,
    now: DateTime<Utc>,
) -> (Vec<AnalysisResult>, RunSummary)
where
    A: GitHubApi + ?Sized,
{
    let mut summary = RunSummary::new(candidates.len());
    let mut results = Vec::with_capacity(candidates.len());

    for (i, candidate) in candidates.iter().enumerate() {
        let span = info_span!(
            "analyze",
            repo = %candidate.full_name,
            position = i + 1,
            total = candidates.len()
        );

        let outcome = analyze_candidate(api, candidate, options, now)
            .instrument(span)
            .await;
        summary.record_result(&outcome);

        match outcome {
            ProcessingResult::Analyzed(result) => {
                results.push(result);
                pause_between_candidates(options.pause).await;
            }
            ProcessingResult::Skipped { repository, reason } => {
                info!(repo = %repository, reason = %reason, "Skipping repository");
            }
        }
    }

    sort_by_score(&mut results);
    (results, summary)
}

async fn analyze_candidate<A>(
    api: &A,
    candidate: &CandidateRepo,
    options: &AnalysisOptions,
    now: DateTime<Utc>,
) -> ProcessingResult
where
    A: GitHubApi + ?Sized,
{
    info!("Analyzing repository");
    ensure_rate_limit(api, RateResource::Core).await;

    let Some(last_commit) = get_last_commit_date(api, &candidate.owner, &candidate.name).await
    else {
        return ProcessingResult::Skipped {
            repository: candidate.full_name.clone(),
            reason: "no commits found".to_string(),
        };
    };

    let days_abandoned = days_since(last_commit, now);
    info!(
        stars = candidate.stars,
        days_since_commit = days_abandoned,
        open_issues = candidate.open_issues,
        "Checking for active forks"
    );

    let active_fork = find_active_fork(
        api,
        &candidate.owner,
        &candidate.name,
        &options.fork_criteria,
        now,
    )
    .await;

    match &active_fork {
        Some(fork) => info!(fork = %fork.full_name, fork_stars = fork.stars, "Found active fork"),
        None => info!("No active forks found"),
    }

    ProcessingResult::Analyzed(AnalysisResult {
        name: candidate.name.clone(),
        owner: candidate.owner.clone(),
        url: candidate.html_url.clone(),
        stars: candidate.stars,
        last_commit,
        days_abandoned,
        open_issues: candidate.open_issues,
        score: round_score(score(candidate.stars, days_abandoned, candidate.open_issues)),
        active_fork,
    })
}

/// Whole days from `then` to `now`; commits dated in the future count as 0.
fn days_since(then: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    u64::try_from((now - then).num_days()).unwrap_or(0)
}

/// Stable sort by descending score.
fn sort_by_score(results: &mut [AnalysisResult]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}
