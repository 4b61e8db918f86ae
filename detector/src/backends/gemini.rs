//! # Gemini Backend
//!
//! This module provides an implementation of the [`CodeBackend`] trait that calls Google's
//! Gemini `generateContent` REST endpoint.
//!
//! ## Overview
//!
//! - The prompt's persona is sent as the system instruction; the rendered task as the user turn.
//! - The text parts of the first candidate are concatenated and returned verbatim. Fence
//!   stripping and report extraction happen in the orchestrators, not here.
//! - Transport errors, non-success statuses and undecodable bodies become
//!   [`DetectorError::Backend`]; a reply without text becomes [`DetectorError::EmptyResponse`].
//!
//! ## Environment
//!
//! The API key is passed in by the caller; this module never reads the environment.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::DetectorError;
use crate::prompts::Prompt;
use crate::traits::backend::CodeBackend;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// A Gemini model endpoint.
///
/// Cloning is cheap; the underlying [`Client`] shares its connection pool.
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// Request body for the Gemini API.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    /// Persona for the model.
    system_instruction: Content,
    /// The conversation turns; a single user turn here.
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    candidate_count: u32,
}

/// Response from the Gemini API.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiRequest {
    fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: prompt.persona.system_instruction(),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: prompt.render(),
                }],
            }],
            generation_config: GenerationConfig { candidate_count: 1 },
        }
    }
}

impl GeminiResponse {
    /// Concatenated text of the first candidate, if it has any.
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

impl GeminiBackend {
    pub fn new(client: Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the API root, e.g. for a proxy or a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl CodeBackend for GeminiBackend {
    async fn generate(&self, prompt: &Prompt) -> Result<String, DetectorError> {
        let request_body = GeminiRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DetectorError::Backend(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| DetectorError::Backend(e.to_string()))?;

        if !status.is_success() {
            return Err(DetectorError::Backend(format!(
                "{} returned {}: {}",
                self.model, status, response_text
            )));
        }

        let response = serde_json::from_str::<GeminiResponse>(&response_text).map_err(|e| {
            DetectorError::Backend(format!(
                "error decoding response body: {}. Full response: {}",
                e, response_text
            ))
        })?;

        response
            .first_text()
            .ok_or_else(|| DetectorError::EmptyResponse(format!("{} produced no text", self.model)))
    }
}
