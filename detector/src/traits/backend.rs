//!
//! # Backend Trait
//!
//! A [`CodeBackend`] turns a [`Prompt`] into a text blob. Code generators and the similarity
//! judge are all backends; they differ only in the persona and task their prompt carries.
//!

use async_trait::async_trait;

use crate::error::DetectorError;
use crate::prompts::Prompt;

#[async_trait]
pub trait CodeBackend: Send + Sync {
    /// Send `prompt` to the backend and return its raw textual reply.
    ///
    /// # Errors
    /// - [`DetectorError::Backend`] on transport, status or decoding failures.
    /// - [`DetectorError::EmptyResponse`] if the backend produced no text.
    async fn generate(&self, prompt: &Prompt) -> Result<String, DetectorError>;
}
