use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use detector::generation::GenerationOrchestrator;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::response::ApiError;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "language must not be empty"))]
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub question: String,
    pub language: String,
    pub generated_codes: BTreeMap<String, String>,
}

/// POST /generate
///
/// Generates one solution per style for the question, fence-stripped on the requested
/// language. In mock mode every style gets the same canned sample.
///
/// ### Request Body
/// ```json
/// { "question": "Return the larger of two numbers", "language": "python" }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "question": "Return the larger of two numbers",
///   "language": "python",
///   "generated_codes": { "chatgpt": "...", "claude": "...", "gemini": "..." }
/// }
/// ```
/// With `EMIT_LEGACY_ALIAS=true` the gemini code is mirrored under `code_generator`.
///
/// - `400`/`415`/`422` for bodies that are not valid JSON, have the wrong shape or fail
///   validation.
/// - `500 Internal Server Error` if any generator fails.
/// ```json
/// { "error": "backend call failed: ..." }
/// ```
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let variants = GenerationOrchestrator::new(state.mode_clone())
        .generate(&req.question, &req.language)
        .await?;

    Ok(Json(GenerateResponse {
        generated_codes: variants.codes(state.config().emit_legacy_alias),
        question: req.question,
        language: req.language,
    }))
}
