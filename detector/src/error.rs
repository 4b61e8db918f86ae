//! Detector Error Types
//!
//! This module defines the [`DetectorError`] enum, which covers every failure the detection
//! pipeline can surface to its callers.
//!
//! # Usage
//!
//! Backend failures propagate to the HTTP layer as server errors. Extraction failures are
//! normally recovered by the analysis orchestrator, which degrades to an error-flagged
//! [`SimilarityReport`](crate::types::SimilarityReport) instead of returning the error.
//!
//! ```rust
//! use detector::error::DetectorError;
//!
//! fn require_text(text: &str) -> Result<&str, DetectorError> {
//!     if text.is_empty() {
//!         return Err(DetectorError::EmptyResponse("judge".to_string()));
//!     }
//!     Ok(text)
//! }
//! ```

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectorError {
    /// A generation or judge call failed (transport, status or decoding).
    #[error("backend call failed: {0}")]
    Backend(String),
    /// The backend answered but produced no text.
    #[error("backend returned no text: {0}")]
    EmptyResponse(String),
    /// No structured similarity report could be recovered from a text blob.
    #[error("failed to extract similarity report: {0}")]
    Extraction(String),
}
