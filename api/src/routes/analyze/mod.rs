//! Similarity analysis routes.
//!
//! Provides `POST /analyze`, which reports the lines a submission shares with each variant.

use axum::{Router, routing::post};
use util::state::AppState;

pub mod post;

pub fn analyze_routes() -> Router<AppState> {
    Router::new().route("/analyze", post(post::analyze))
}
