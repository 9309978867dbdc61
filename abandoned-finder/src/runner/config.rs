//! Runner configuration.

use crate::activity::ForkCriteria;
use crate::client::ClientConfig;
use crate::config::{ConfigError, FinderSettings};
use crate::query::SearchFilter;
use crate::report::AnalysisOptions;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for one abandoned-project scan.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Search thresholds.
    filter: SearchFilter,
    /// Fork criteria and inter-candidate pause.
    analysis: AnalysisOptions,
    /// CSV output path.
    output: PathBuf,
    /// GitHub client settings.
    client: ClientConfig,
}

impl RunnerConfig {
    /// Creates a configuration with default fork criteria, default pause,
    /// and an anonymous client.
    pub fn new(filter: SearchFilter, output: PathBuf) -> Self {
        Self {
            filter,
            analysis: AnalysisOptions::default(),
            output,
            client: ClientConfig::default(),
        }
    }

    /// Builds a configuration from validated settings and an optional token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the settings fail validation.
    pub fn from_settings(
        settings: &FinderSettings,
        token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let source = "settings";
        settings.validate(source)?;

        let mut client = ClientConfig::new(token);
        if let Some(api_url) = settings.parsed_api_url(source)? {
            client = client.with_api_url(api_url);
        }

        Ok(Self::new(settings.search_filter(), settings.output.clone())
            .with_fork_criteria(settings.fork_criteria())
            .with_pause(settings.pause())
            .with_client(client))
    }

    /// Sets the active-fork criteria.
    pub fn with_fork_criteria(mut self, criteria: ForkCriteria) -> Self {
        self.analysis.fork_criteria = criteria;
        self
    }

    /// Sets the inter-candidate pause.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.analysis.pause = pause;
        self
    }

    /// Sets the GitHub client settings.
    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }

    /// Returns the search thresholds.
    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    /// Returns the analysis options.
    pub fn analysis(&self) -> &AnalysisOptions {
        &self.analysis
    }

    /// Returns the CSV output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Returns the GitHub client settings.
    pub fn client(&self) -> &ClientConfig {
        &self.client
    }
}
