//! Configuration management for trialsearch.
//!
//! Loads configuration from ${TRIALSEARCH_HOME}/config.toml with sensible
//! defaults. The backend URL can be overridden per-invocation with the
//! `TRIALSEARCH_BASE_URL` environment variable.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default search backend URL (the local development backend).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5003";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the search backend.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location, applying the
    /// `TRIALSEARCH_BASE_URL` override if set.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&paths::config_path())?;
        if let Ok(url) = std::env::var("TRIALSEARCH_BASE_URL")
            && !url.is_empty()
        {
            config.base_url = url;
        }
        Ok(config)
    }

    /// Loads configuration from a specific file. Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Filesystem locations used by trialsearch.
pub mod paths {
    use std::path::PathBuf;

    /// Returns the application home directory.
    ///
    /// `${TRIALSEARCH_HOME}` if set, otherwise `~/.trialsearch`.
    pub fn app_home() -> PathBuf {
        if let Some(home) = std::env::var_os("TRIALSEARCH_HOME") {
            return PathBuf::from(home);
        }
        home_dir()
            .map(|home| home.join(".trialsearch"))
            .unwrap_or_else(|| PathBuf::from(".trialsearch"))
    }

    /// Returns the user's home directory, if resolvable.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        app_home().join("config.toml")
    }

    /// Directory for diagnostic log files.
    pub fn log_dir() -> PathBuf {
        app_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "http://search.internal:8080""#).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.base_url, "http://search.internal:8080");
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "some_future_knob = 3").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }
}
