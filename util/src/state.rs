//! Application state container shared across Axum route handlers.
//!
//! Holds the immutable configuration and the operating [`Mode`] resolved from it. Both are
//! cheap to clone; live backends share one `reqwest::Client` connection pool.

use std::sync::Arc;
use std::time::Duration;

use detector::Mode;
use detector::backends::gemini_backends;
use reqwest::Client;
use tracing::info;

use crate::config::{AppConfig, ConfigError};

/// Central application state shared across the server.
#[derive(Clone, Debug)]
pub struct AppState {
    config: Arc<AppConfig>,
    mode: Mode,
}

impl AppState {
    /// Resolves the operating mode from `config`.
    ///
    /// In live mode this builds the HTTP client with the configured timeout and the Gemini
    /// backends on top of it.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let mode = if config.mock_mode {
            Mode::Mock
        } else {
            let api_key = config
                .gemini_api_key
                .as_deref()
                .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;
            let client = Client::builder()
                .timeout(Duration::from_secs(config.backend_timeout_secs))
                .build()
                .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
            Mode::Live(gemini_backends(
                client,
                api_key,
                &config.gemini_model,
                config.gemini_base_url.as_deref(),
            ))
        };

        info!(mock = mode.is_mock(), model = %config.gemini_model, "Resolved operating mode");
        Ok(Self::with_mode(config, mode))
    }

    /// Uses an explicit mode, e.g. one built from test doubles.
    pub fn with_mode(config: AppConfig, mode: Mode) -> Self {
        Self {
            config: Arc::new(config),
            mode,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a cloned copy of the mode for a per-request orchestrator.
    pub fn mode_clone(&self) -> Mode {
        self.mode.clone()
    }

    pub fn is_mock(&self) -> bool {
        self.mode.is_mock()
    }
}
