//! Finder settings, as read from a TOML file or assembled from defaults.

use super::ConfigError;
use crate::activity::ForkCriteria;
use crate::query::{SearchFilter, DEFAULT_LANGUAGE};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// All tunable settings for a run, except the credential.
///
/// Every key is optional in the file; missing keys take the defaults below.
///
/// ```toml
/// min-stars = 1000
/// days-abandoned = 365
/// max-results = 50
/// output = "abandoned_projects.csv"
/// language = "python"
/// min-fork-stars = 100
/// pause-ms = 500
/// api-url = "https://api.github.com/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct FinderSettings {
    /// Minimum stars a candidate needs.
    pub min_stars: u32,

    /// Days without a push before a repository counts as abandoned.
    pub days_abandoned: u32,

    /// Maximum number of candidates to analyze.
    pub max_results: u32,

    /// CSV output path.
    pub output: PathBuf,

    /// Language qualifier for the search.
    pub language: String,

    /// Minimum stars an active fork needs.
    pub min_fork_stars: u32,

    /// Pause after each analyzed candidate, in milliseconds.
    pub pause_ms: u64,

    /// Alternate API root.
    pub api_url: Option<String>,
}

impl Default for FinderSettings {
    fn default() -> Self {
        Self {
            min_stars: 1000,
            days_abandoned: 365,
            max_results: 50,
            output: PathBuf::from("abandoned_projects.csv"),
            language: DEFAULT_LANGUAGE.to_string(),
            min_fork_stars: ForkCriteria::default().min_stars,
            pause_ms: 500,
            api_url: None,
        }
    }
}

impl FinderSettings {
    /// Checks value ranges. `source` names where the settings came from.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a zero `max-results`, a
    /// blank or multi-word `language`, or an `api-url` that is not an
    /// absolute http(s) URL.
    pub fn validate(&self, source: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: source.to_string(),
            message,
        };

        if self.max_results == 0 {
            return Err(invalid("max-results must be at least 1".to_string()));
        }
        if self.language.trim().is_empty() || self.language.contains(char::is_whitespace) {
            return Err(invalid(format!(
                "language must be a single word, got '{}'",
                self.language
            )));
        }
        self.parsed_api_url(source)?;
        Ok(())
    }

    /// Parses `api-url`, if set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the URL is malformed or
    /// not http(s).
    pub fn parsed_api_url(&self, source: &str) -> Result<Option<Url>, ConfigError> {
        let Some(raw) = &self.api_url else {
            return Ok(None);
        };

        let url = Url::parse(raw).map_err(|e| ConfigError::ValidationError {
            path: source.to_string(),
            message: format!("api-url '{raw}' is invalid: {e}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                path: source.to_string(),
                message: format!("api-url '{raw}' must use http or https"),
            });
        }
        Ok(Some(url))
    }

    /// The search thresholds described by these settings.
    pub fn search_filter(&self) -> SearchFilter {
        SearchFilter::new(self.min_stars, self.days_abandoned, self.max_results)
            .with_language(self.language.clone())
    }

    /// The active-fork criteria described by these settings.
    pub fn fork_criteria(&self) -> ForkCriteria {
        ForkCriteria::default().with_min_stars(self.min_fork_stars)
    }

    /// The inter-candidate pause.
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}
