//! Application configuration.
//!
//! `AppConfig` is loaded once at startup from `.env` and environment variables and then
//! shared read-only through [`AppState`](crate::state::AppState). Nothing re-reads the
//! environment after startup, so the mock flag cannot change while the process runs.

use std::env;

use detector::backends::gemini::DEFAULT_MODEL;
use detector::utilities::flag::is_enabled;
use thiserror::Error;

/// Errors raised while loading configuration. Any of these aborts startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required when MOCK_MODE is off")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    /// When set, no backend is ever contacted.
    pub mock_mode: bool,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: Option<String>,
    pub backend_timeout_secs: u64,
    /// Mirror the gemini variant under its legacy `code_generator` key in responses.
    pub emit_legacy_alias: bool,
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    /// - [`ConfigError::Invalid`] if a numeric setting does not parse.
    /// - [`ConfigError::Missing`] if live mode is selected without `GEMINI_API_KEY`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());
        let flag = |key: &str| get(key).is_some_and(|v| is_enabled(&v));

        let config = Self {
            env: or("APP_ENV", "development"),
            project_name: or("PROJECT_NAME", "code-similarity"),
            log_level: or("LOG_LEVEL", "api=info,detector=info"),
            log_file: or("LOG_FILE", "api.log"),
            log_to_stdout: flag("LOG_TO_STDOUT"),
            host: or("HOST", "127.0.0.1"),
            port: parse_number("PORT", get("PORT"), 8000)?,
            mock_mode: flag("MOCK_MODE"),
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: or("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_base_url: get("GEMINI_BASE_URL"),
            backend_timeout_secs: parse_number(
                "BACKEND_TIMEOUT_SECS",
                get("BACKEND_TIMEOUT_SECS"),
                120,
            )?,
            emit_legacy_alias: flag("EMIT_LEGACY_ALIAS"),
        };

        if !config.mock_mode && config.gemini_api_key.is_none() {
            return Err(ConfigError::Missing("GEMINI_API_KEY"));
        }
        Ok(config)
    }

    /// Mock-mode configuration with defaults for everything else.
    pub fn mock() -> Self {
        Self {
            env: "test".into(),
            project_name: "code-similarity".into(),
            log_level: "api=info,detector=info".into(),
            log_file: "api.log".into(),
            log_to_stdout: false,
            host: "127.0.0.1".into(),
            port: 8000,
            mock_mode: true,
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.into(),
            gemini_base_url: None,
            backend_timeout_secs: 120,
            emit_legacy_alias: false,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: v,
            reason: e.to_string(),
        }),
    }
}
