//! Search query construction.
//!
//! Turns user thresholds into GitHub's repository search grammar, e.g.
//! `language:python stars:>=1000 pushed:<2023-06-01 archived:false`.

use crate::client::SearchQuery;
use chrono::{Days, NaiveDate};

/// Largest page size the search API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Language searched when none is configured.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Thresholds that define an abandoned repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    /// Minimum star count.
    pub min_stars: u32,

    /// Days without a push before a repository counts as stale.
    pub stale_days: u32,

    /// Maximum number of candidates to analyze. Always at least 1.
    pub max_results: u32,

    /// Language qualifier value.
    pub language: String,
}

impl SearchFilter {
    /// Creates a filter for the default language.
    ///
    /// `max_results` of zero is raised to one.
    pub fn new(min_stars: u32, stale_days: u32, max_results: u32) -> Self {
        Self {
            min_stars,
            stale_days,
            max_results: max_results.max(1),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Sets the language qualifier.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Page size for the search request: `min(100, max_results)`.
    pub fn per_page(&self) -> u8 {
        // Bounded by MAX_PER_PAGE, so the cast cannot truncate.
        self.max_results.clamp(1, MAX_PER_PAGE) as u8
    }

    /// The date a repository must not have been pushed to since.
    pub fn pushed_before(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(u64::from(self.stale_days)))
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Builds the search qualifier string for `filter` relative to `today`.
pub fn build_search_query(filter: &SearchFilter, today: NaiveDate) -> String {
    format!(
        "language:{} stars:>={} pushed:<{} archived:false",
        filter.language,
        filter.min_stars,
        filter.pushed_before(today).format("%Y-%m-%d")
    )
}

/// Builds the request parameters for one page of search results.
pub fn search_request(filter: &SearchFilter, today: NaiveDate, page: u32) -> SearchQuery {
    SearchQuery {
        q: build_search_query(filter, today),
        sort: "stars".to_string(),
        order: "desc".to_string(),
        per_page: filter.per_page(),
        page,
    }
}
