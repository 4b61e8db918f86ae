use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use detector::analysis::{AnalysisOrchestrator, resolve_variants};
use detector::generation::GenerationOrchestrator;
use detector::types::{SimilarityReport, SourceText, SuppliedVariants};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::response::ApiError;

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "language must not be empty"))]
    pub language: String,
    pub user_code: String,
    #[serde(default, alias = "code_generator_code")]
    pub gemini_code: Option<String>,
    #[serde(default)]
    pub chatgpt_code: Option<String>,
    #[serde(default)]
    pub claude_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub question: String,
    pub language: String,
    /// The submission exactly as received.
    pub user_code: String,
    pub generated_codes: BTreeMap<String, String>,
    pub similar_lines: SimilarityReport,
}

/// POST /analyze
///
/// Compares a submission against the three variants and reports matching lines.
///
/// If the body carries at least one non-empty `*_code` field, those codes are used as the
/// variants (missing ones count as empty) and nothing is generated. Otherwise the variants
/// are generated first, exactly as `POST /generate` would.
///
/// ### Request Body
/// ```json
/// {
///   "question": "Return the larger of two numbers",
///   "language": "python",
///   "user_code": "def find_max(a, b):\n    return a if a > b else b",
///   "gemini_code": "...",
///   "chatgpt_code": "...",
///   "claude_code": "..."
/// }
/// ```
/// `code_generator_code` is accepted in place of `gemini_code`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "question": "...",
///   "language": "python",
///   "user_code": "...",
///   "generated_codes": { "chatgpt": "...", "claude": "...", "gemini": "..." },
///   "similar_lines": {
///     "gemini_vs_user": [{ "user_line_number": 1, "ai_line_number": 1, "line_content": "..." }],
///     "chatgpt_vs_user": [],
///     "claude_vs_user": []
///   }
/// }
/// ```
/// When the judge's reply cannot be parsed, `similar_lines` also carries
/// `"error": "failed_to_parse_agent_output"` and the reply as `raw_output`.
///
/// - `400`/`415`/`422` for bodies that are not valid JSON, have the wrong shape or fail
///   validation.
/// - `500 Internal Server Error` if generation or the judge call fails.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let mode = state.mode_clone();
    let supplied = SuppliedVariants {
        gemini: req.gemini_code,
        chatgpt: req.chatgpt_code,
        claude: req.claude_code,
    };
    let generator = GenerationOrchestrator::new(mode.clone());
    let variants = resolve_variants(supplied, &generator, &req.question, &req.language).await?;

    let submission = SourceText::new(req.user_code.as_str(), req.language.as_str());
    let similar_lines = AnalysisOrchestrator::new(mode)
        .analyze(&submission, &req.question, &variants, &req.language)
        .await?;

    Ok(Json(AnalyzeResponse {
        generated_codes: variants.codes(state.config().emit_legacy_alias),
        question: req.question,
        language: req.language,
        user_code: req.user_code,
        similar_lines,
    }))
}
