//! Application settings.
//!
//! Settings are layered: built-in defaults, then an optional `energize.*`
//! file in the working directory, then `ENERGIZE_*` environment variables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable pretty format.
    #[default]
    Pretty,
    /// JSON lines.
    Json,
}

/// Settings for the admin client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend origin or API root. See [`Settings::api_base`].
    pub api_url: String,
    /// Per-request timeout for the HTTP client.
    pub request_timeout_secs: u64,
    /// Settle time before a plant search query is sent.
    pub search_debounce_ms: u64,
    /// Where the session token is persisted. `None` uses the platform
    /// config directory.
    pub session_file: Option<PathBuf>,
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            request_timeout_secs: 30,
            search_debounce_ms: 300,
            session_file: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Settings {
    /// Environment variable prefix (`ENERGIZE_API_URL`, ...).
    pub const ENV_PREFIX: &'static str = "ENERGIZE";

    /// Loads settings from `./energize.*` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`](crate::CoreError::Config) if a source
    /// is malformed or a value has the wrong type.
    pub fn load() -> Result<Self> {
        Self::from_sources(Some(Path::new("energize")), None)
    }

    /// Loads settings from an optional file stem and an environment map.
    ///
    /// When `env` is `None` the process environment is read.
    pub fn from_sources(file: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file).required(false));
        }

        let settings: Settings = builder
            .add_source(config::Environment::with_prefix(Self::ENV_PREFIX).source(env))
            .build()?
            .try_deserialize()?;

        tracing::debug!(api_url = %settings.api_url, "Loaded settings");
        Ok(settings)
    }

    /// Returns the API root, always ending in `/api` and never in `/`.
    ///
    /// A bare origin such as `http://localhost:3000/` becomes
    /// `http://localhost:3000/api`; a value that already ends in `/api` is
    /// kept as is.
    #[must_use]
    pub fn api_base(&self) -> String {
        let trimmed = self.api_url.trim().trim_end_matches('/');
        if trimmed.ends_with("/api") {
            trimmed.to_string()
        } else {
            format!("{trimmed}/api")
        }
    }

    /// Per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Plant search debounce interval.
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::from_sources(None, env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.search_debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let settings = Settings::from_sources(
            None,
            env(&[
                ("ENERGIZE_API_URL", "https://os.dsenergize.com"),
                ("ENERGIZE_SEARCH_DEBOUNCE_MS", "500"),
                ("ENERGIZE_LOG_FORMAT", "json"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.api_url, "https://os.dsenergize.com");
        assert_eq!(settings.search_debounce_ms, 500);
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn test_file_source_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("energize.toml");
        std::fs::write(&path, "api_url = \"http://10.0.0.5:3000/api/\"\n").unwrap();

        let settings = Settings::from_sources(Some(&path), env(&[])).unwrap();
        assert_eq!(settings.api_base(), "http://10.0.0.5:3000/api");
    }

    #[test]
    fn test_api_base_appends_segment() {
        let settings = Settings {
            api_url: "http://localhost:3000/".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.api_base(), "http://localhost:3000/api");
    }

    #[test]
    fn test_api_base_keeps_existing_segment() {
        let settings = Settings {
            api_url: "https://os.dsenergize.com/api".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.api_base(), "https://os.dsenergize.com/api");
    }
}
