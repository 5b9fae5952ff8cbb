use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "BELLBOARD_API_URL";
/// Environment variable pre-filling the admin token.
pub const ENV_ADMIN_TOKEN: &str = "BELLBOARD_ADMIN_TOKEN";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/bellboard/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bellboard").join("config.toml")
    }

    /// Loads configuration from the default config file, then applies
    /// environment overrides (`BELLBOARD_API_URL`, `BELLBOARD_ADMIN_TOKEN`).
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_file(&Self::config_path())?;
        config.apply_env(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// A missing file yields `Config::default()`; an unreadable or
    /// unparseable one is an error.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Applies environment-style overrides. `env` is injected so tests
    /// don't have to mutate the process environment.
    pub fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(url) = env(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.api_url = url;
        }
        if let Some(token) = env(ENV_ADMIN_TOKEN).filter(|v| !v.is_empty()) {
            self.admin_token = Some(token);
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "API base URL must not be empty".to_string(),
            });
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                message: format!("API base URL '{}' must be http(s)", self.api_url),
            });
        }

        Ok(())
    }
}
