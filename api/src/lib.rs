//! HTTP service exposing code variant generation and line-similarity analysis.

pub mod middleware;
pub mod response;
pub mod routes;

use axum::{Router, middleware::from_fn};
use tower_http::cors::CorsLayer;
use util::state::AppState;

use crate::middleware::log_request;
use crate::routes::routes;

/// The full application: all routes plus request logging and permissive CORS.
pub fn app(app_state: AppState) -> Router {
    routes(app_state)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive())
}
