//! GitHub API access.
//!
//! Every remote call made by the finder goes through the [`GitHubApi`] trait.
//! [`OctocrabApi`] is the production implementation; it is built once from a
//! [`ClientConfig`] and then passed by reference into each fetch operation.

mod error;
mod types;

pub use error::ApiError;
pub use types::{
    CommitDetail, CommitListing, CommitRecord, CommitSignature, ForkListing, ForkRecord,
    OwnerSummary, RateResource, RepositorySummary, SearchPage, SearchQuery,
};

use crate::rate_limit::RateLimitInfo;
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;
use url::Url;

/// Environment variable consulted when no token is passed explicitly.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Settings used to construct the GitHub client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Personal access token. Raises the rate-limit ceiling when present.
    token: Option<String>,
    /// Alternate API root, e.g. a GitHub Enterprise instance.
    api_url: Option<Url>,
}

impl ClientConfig {
    /// Creates a configuration with an optional token and the public API root.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            api_url: None,
        }
    }

    /// Sets a custom API root.
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Returns the configured token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns true if requests will carry a credential.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the custom API root, if any.
    pub fn api_url(&self) -> Option<&Url> {
        self.api_url.as_ref()
    }
}

/// Picks the token to use: the explicit value first, then [`TOKEN_ENV_VAR`].
///
/// Blank values count as absent.
pub fn resolve_token(explicit: Option<String>) -> Option<String> {
    explicit
        .filter(|t| !t.trim().is_empty())
        .or_else(|| std::env::var(TOKEN_ENV_VAR).ok())
        .filter(|t| !t.trim().is_empty())
}

/// The read-only GitHub endpoints used by the finder.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET /search/repositories`.
    async fn search_repositories(&self, query: &SearchQuery) -> Result<SearchPage, ApiError>;

    /// `GET /repos/{owner}/{repo}/commits`.
    async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        listing: &CommitListing,
    ) -> Result<Vec<CommitRecord>, ApiError>;

    /// `GET /repos/{owner}/{repo}/forks`.
    async fn list_forks(
        &self,
        owner: &str,
        repo: &str,
        listing: &ForkListing,
    ) -> Result<Vec<ForkRecord>, ApiError>;

    /// `GET /rate_limit`, narrowed to one resource bucket.
    async fn rate_limit(&self, resource: RateResource) -> Result<RateLimitInfo, ApiError>;
}

/// [`GitHubApi`] backed by an octocrab client.
#[derive(Clone)]
pub struct OctocrabApi {
    octocrab: Octocrab,
}

impl OctocrabApi {
    /// Builds the client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API root is not a valid URI or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder();
        if let Some(token) = config.token() {
            builder = builder.personal_token(token.to_string());
        }
        if let Some(api_url) = config.api_url() {
            builder = builder.base_uri(api_url.as_str())?;
        }
        Ok(Self {
            octocrab: builder.build()?,
        })
    }

    /// Wraps an existing octocrab client.
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl GitHubApi for OctocrabApi {
    async fn search_repositories(&self, query: &SearchQuery) -> Result<SearchPage, ApiError> {
        debug!(q = %query.q, page = query.page, "GET /search/repositories");
        Ok(self
            .octocrab
            .get("/search/repositories", Some(query))
            .await?)
    }

    async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        listing: &CommitListing,
    ) -> Result<Vec<CommitRecord>, ApiError> {
        let route = format!("/repos/{owner}/{repo}/commits");
        debug!(route = %route, "GET commits");
        Ok(self.octocrab.get(route, Some(listing)).await?)
    }

    async fn list_forks(
        &self,
        owner: &str,
        repo: &str,
        listing: &ForkListing,
    ) -> Result<Vec<ForkRecord>, ApiError> {
        let route = format!("/repos/{owner}/{repo}/forks");
        debug!(route = %route, "GET forks");
        Ok(self.octocrab.get(route, Some(listing)).await?)
    }

    async fn rate_limit(&self, resource: RateResource) -> Result<RateLimitInfo, ApiError> {
        let rate_limit = self.octocrab.ratelimit().get().await?;
        let rate = match resource {
            RateResource::Search => &rate_limit.resources.search,
            RateResource::Core => &rate_limit.resources.core,
        };

        Ok(RateLimitInfo {
            remaining: rate.remaining as u32,
            reset: rate.reset,
            limit: rate.limit as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_treated_as_absent() {
        let config = ClientConfig::new(Some("   ".to_string()));
        assert!(!config.is_authenticated());
        assert!(config.token().is_none());
    }

    #[test]
    fn explicit_token_wins_over_environment() {
        temp_env::with_var(TOKEN_ENV_VAR, Some("from-env"), || {
            assert_eq!(
                resolve_token(Some("explicit".to_string())).as_deref(),
                Some("explicit")
            );
        });
    }

    #[test]
    fn environment_token_used_when_option_absent() {
        temp_env::with_var(TOKEN_ENV_VAR, Some("from-env"), || {
            assert_eq!(resolve_token(None).as_deref(), Some("from-env"));
        });
    }

    #[test]
    fn empty_explicit_token_falls_back_to_environment() {
        temp_env::with_var(TOKEN_ENV_VAR, Some("from-env"), || {
            assert_eq!(
                resolve_token(Some(String::new())).as_deref(),
                Some("from-env")
            );
        });
    }

    #[test]
    fn no_token_anywhere() {
        temp_env::with_var_unset(TOKEN_ENV_VAR, || {
            assert!(resolve_token(None).is_none());
        });
    }

    #[test]
    fn api_url_is_kept() {
        let url = Url::parse("https://ghe.example.com/api/v3/").unwrap();
        let config = ClientConfig::new(None).with_api_url(url.clone());
        assert_eq!(config.api_url(), Some(&url));
    }
}
