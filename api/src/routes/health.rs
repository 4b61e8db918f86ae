use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde::Serialize;
use util::state::AppState;

/// Builds the liveness routes: `GET /` and `GET /health`.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    mock_mode: bool,
}

/// GET /
///
/// Plain-text `ok`, for probes that do not parse JSON.
async fn root() -> &'static str {
    "ok"
}

/// GET /health
///
/// Reports that the service is up and whether it runs in mock mode.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "status": "ok", "mock_mode": true }
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        mock_mode: state.is_mock(),
    })
}
