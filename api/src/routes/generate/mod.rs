//! Variant generation routes.
//!
//! Provides `POST /generate`, which asks the three generators for a solution each.

use axum::{Router, routing::post};
use util::state::AppState;

pub mod post;

pub fn generate_routes() -> Router<AppState> {
    Router::new().route("/generate", post(post::generate))
}
