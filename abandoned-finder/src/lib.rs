#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod activity;
pub mod client;
pub mod config;
pub mod discovery;
pub mod query;
pub mod rate_limit;
pub mod report;
pub mod runner;
pub mod score;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

pub use activity::{
    find_active_fork, get_last_commit_date, select_active_fork, ForkCandidate, ForkCriteria,
};
pub use client::{resolve_token, ApiError, ClientConfig, GitHubApi, OctocrabApi, TOKEN_ENV_VAR};
pub use config::{load_settings, ConfigError, FinderSettings};
pub use discovery::{search_repositories, CandidateRepo};
pub use query::{build_search_query, search_request, SearchFilter};
pub use rate_limit::{
    ensure_rate_limit, pause_between_candidates, required_wait, wait_if_needed, RateLimitInfo,
};
pub use report::{
    analyze, persist, print_summary, write_csv, write_summary, AnalysisOptions, AnalysisResult,
    ReportError,
};
pub use runner::{RunReport, Runner, RunnerConfig, RunnerError};
pub use score::{round_score, score};
pub use summary::{ProcessingResult, RunSummary};
