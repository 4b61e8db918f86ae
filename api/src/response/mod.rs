use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use detector::error::DetectorError;
use serde::Serialize;
use validator::ValidationErrors;

/// Body of every non-2xx JSON response.
///
/// ```json
/// { "error": "backend call failed: gemini-2.0-flash returned 503" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A failed request: an HTTP status plus the message placed in [`ErrorResponse`].
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

/// Backend failures surface as `500`.
impl From<DetectorError> for ApiError {
    fn from(e: DetectorError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }
}

/// Keeps axum's status: `400` for bad JSON syntax, `422` for a wrong shape, `415` for a
/// missing content type.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            common::format_validation_errors(&errors),
        )
    }
}
