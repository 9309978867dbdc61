//! In-memory [`GitHubApi`] used by unit tests.

use crate::client::{
    ApiError, CommitDetail, CommitListing, CommitRecord, CommitSignature, ForkListing,
    ForkRecord, GitHubApi, OwnerSummary, RateResource, RepositorySummary, SearchPage,
    SearchQuery,
};
use crate::rate_limit::RateLimitInfo;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct FakeApi {
    search_results: Option<Vec<RepositorySummary>>,
    failing_search_page: Option<u32>,
    commits: HashMap<String, Vec<CommitRecord>>,
    forks: HashMap<String, Vec<ForkRecord>>,
    rate_limit_fails: bool,
    requests: Mutex<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self {
            search_results: Some(Vec::new()),
            ..Default::default()
        }
    }

    pub(crate) fn with_search_results(mut self, repos: Vec<RepositorySummary>) -> Self {
        self.search_results = Some(repos);
        self
    }

    pub(crate) fn with_search_failure(mut self) -> Self {
        self.search_results = None;
        self
    }

    pub(crate) fn with_search_failure_on_page(mut self, page: u32) -> Self {
        self.failing_search_page = Some(page);
        self
    }

    pub(crate) fn with_commit_dates(mut self, full_name: &str, dates: Vec<DateTime<Utc>>) -> Self {
        let commits = dates
            .into_iter()
            .map(|date| CommitRecord {
                commit: CommitDetail {
                    author: Some(CommitSignature { date: Some(date) }),
                },
            })
            .collect();
        self.commits.insert(full_name.to_string(), commits);
        self
    }

    pub(crate) fn with_commits(mut self, full_name: &str, commits: Vec<CommitRecord>) -> Self {
        self.commits.insert(full_name.to_string(), commits);
        self
    }

    pub(crate) fn with_forks(mut self, full_name: &str, forks: Vec<ForkRecord>) -> Self {
        self.forks.insert(full_name.to_string(), forks);
        self
    }

    pub(crate) fn with_rate_limit_failure(mut self) -> Self {
        self.rate_limit_fails = true;
        self
    }

    /// Requests seen so far, formatted as `<endpoint> <details>`.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }
}

#[async_trait]
impl GitHubApi for FakeApi {
    async fn search_repositories(&self, query: &SearchQuery) -> Result<SearchPage, ApiError> {
        self.record(format!(
            "search q={} per_page={} page={}",
            query.q, query.per_page, query.page
        ));

        if self.failing_search_page == Some(query.page) {
            return Err(ApiError::RequestFailed("search page unavailable".to_string()));
        }
        let Some(all) = &self.search_results else {
            return Err(ApiError::RequestFailed("search unavailable".to_string()));
        };

        let per_page = usize::from(query.per_page);
        let start = (query.page as usize - 1) * per_page;
        let items = all.iter().skip(start).take(per_page).cloned().collect();

        Ok(SearchPage {
            total_count: all.len() as u64,
            incomplete_results: false,
            items,
        })
    }

    async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        listing: &CommitListing,
    ) -> Result<Vec<CommitRecord>, ApiError> {
        self.record(format!("commits {owner}/{repo} per_page={}", listing.per_page));
        self.commits
            .get(&format!("{owner}/{repo}"))
            .map(|commits| {
                commits
                    .iter()
                    .take(usize::from(listing.per_page))
                    .cloned()
                    .collect()
            })
            .ok_or_else(|| ApiError::RequestFailed(format!("no commits for {owner}/{repo}")))
    }

    async fn list_forks(
        &self,
        owner: &str,
        repo: &str,
        listing: &ForkListing,
    ) -> Result<Vec<ForkRecord>, ApiError> {
        self.record(format!(
            "forks {owner}/{repo} sort={} per_page={}",
            listing.sort, listing.per_page
        ));
        self.forks
            .get(&format!("{owner}/{repo}"))
            .map(|forks| {
                forks
                    .iter()
                    .take(usize::from(listing.per_page))
                    .cloned()
                    .collect()
            })
            .ok_or_else(|| ApiError::RequestFailed(format!("no forks for {owner}/{repo}")))
    }

    async fn rate_limit(&self, resource: RateResource) -> Result<RateLimitInfo, ApiError> {
        self.record(format!("rate_limit {resource:?}"));
        if self.rate_limit_fails {
            return Err(ApiError::RequestFailed("rate limit unavailable".to_string()));
        }
        Ok(RateLimitInfo {
            remaining: 5000,
            reset: 0,
            limit: 5000,
        })
    }
}

pub(crate) fn repo_summary(owner: &str, name: &str, stars: u32, issues: u32) -> RepositorySummary {
    RepositorySummary {
        owner: OwnerSummary {
            login: owner.to_string(),
        },
        name: name.to_string(),
        full_name: format!("{owner}/{name}"),
        html_url: format!("https://github.com/{owner}/{name}"),
        stargazers_count: stars,
        open_issues_count: issues,
    }
}

pub(crate) fn fork(full_name: &str, pushed_at: Option<DateTime<Utc>>, stars: u32) -> ForkRecord {
    ForkRecord {
        full_name: full_name.to_string(),
        html_url: format!("https://github.com/{full_name}"),
        pushed_at,
        stargazers_count: stars,
    }
}

pub(crate) fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}
