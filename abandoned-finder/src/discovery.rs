//! Repository discovery using the GitHub repository search API.
//!
//! Finds popular repositories whose last push predates the staleness window.

mod repository;

pub use repository::CandidateRepo;

use crate::client::{GitHubApi, RateResource};
use crate::query::{search_request, SearchFilter};
use crate::rate_limit::ensure_rate_limit;
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, error, info, info_span, warn, Instrument};

/// Maximum results reachable through the search API.
const MAX_SEARCH_RESULTS: usize = 1000;

/// Searches for candidate repositories matching `filter`.
///
/// Pages through results (star-descending) until `filter.max_results`
/// candidates are collected, GitHub returns a short page, or the search API's
/// result ceiling is reached.
///
/// Failures never propagate. If the first page fails the error is logged and
/// an empty vector is returned; if a later page fails, the candidates gathered
/// so far are kept.
pub async fn search_repositories<A>(
    api: &A,
    filter: &SearchFilter,
    today: NaiveDate,
) -> Vec<CandidateRepo>
where
    A: GitHubApi + ?Sized,
{
    let span = info_span!(
        "search",
        language = %filter.language,
        min_stars = filter.min_stars,
        stale_days = filter.stale_days
    );

    async {
        info!(
            "Searching for {} repos with {}+ stars...",
            filter.language, filter.min_stars
        );

        let max_results = (filter.max_results as usize).min(MAX_SEARCH_RESULTS);
        let per_page = usize::from(filter.per_page());
        let mut candidates = Vec::new();
        let mut page = 1u32;

        loop {
            ensure_rate_limit(api, RateResource::Search).await;

            let request = search_request(filter, today, page);
            debug!(query = %request.q, page, "Executing repository search");

            match api.search_repositories(&request).await {
                Ok(result) => {
                    if page == 1 {
                        debug!(total_count = result.total_count, "Search matched");
                    }
                    if result.incomplete_results {
                        warn!(page, "GitHub returned incomplete search results");
                    }

                    let count = result.items.len();
                    candidates.extend(result.items.into_iter().map(CandidateRepo::from));

                    if count < per_page || candidates.len() >= max_results {
                        break;
                    }
                }
                Err(e) if page == 1 => {
                    error!(error = %e, "Error searching repositories");
                    return Vec::new();
                }
                Err(e) => {
                    warn!(
                        page,
                        error = %e,
                        "Failed to fetch search page, keeping results collected so far"
                    );
                    break;
                }
            }

            page += 1;
        }

        let mut candidates = deduplicate(candidates);
        candidates.truncate(max_results);

        info!(count = candidates.len(), "Found candidate repositories");
        candidates
    }
    .instrument(span)
    .await
}

/// Drops repeated repositories, keeping the first occurrence.
///
/// Star counts can shift between page requests, which may move a repository
/// across a page boundary.
fn deduplicate(candidates: Vec<CandidateRepo>) -> Vec<CandidateRepo> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|repo| seen.insert(repo.full_name.clone()))
        .collect()
}
