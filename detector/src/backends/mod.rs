//! # Backends
//!
//! Concrete [`CodeBackend`](crate::traits::backend::CodeBackend) implementations.
//!
//! - [`gemini`]: Google's Gemini `generateContent` API.

pub mod gemini;

use std::sync::Arc;

use reqwest::Client;

use crate::Backends;
use crate::backends::gemini::GeminiBackend;

/// Builds the three generators and the judge on one Gemini endpoint.
///
/// Personas travel with each prompt, so every role can share the same endpoint.
pub fn gemini_backends(
    client: Client,
    api_key: &str,
    model: &str,
    base_url: Option<&str>,
) -> Backends {
    let mut backend = GeminiBackend::new(client, api_key, model);
    if let Some(url) = base_url {
        backend = backend.with_base_url(url);
    }
    Backends::shared(Arc::new(backend))
}
