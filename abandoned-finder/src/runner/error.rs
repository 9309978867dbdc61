//! Runner error types.

/// Errors that can occur while setting up a run.
///
/// Once a run has started, failures are logged and absorbed instead.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading and validation errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
