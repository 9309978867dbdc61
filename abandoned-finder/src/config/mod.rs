//! Configuration loading.
//!
//! Settings come from an optional TOML file; command-line flags are applied
//! on top by the caller.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::FinderSettings;

use std::path::Path;
use tracing::{debug, info};

/// Loads and validates settings from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, not valid
/// TOML, or fails validation.
pub fn load_settings(path: &Path) -> Result<FinderSettings, ConfigError> {
    info!(path = %path.display(), "Loading config file");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let settings: FinderSettings =
        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

    settings.validate(&path.display().to_string())?;
    debug!(?settings, "Loaded settings");
    Ok(settings)
}
