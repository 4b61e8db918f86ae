//! HTTP route entry point.
//!
//! Route groups:
//! - `/`, `/health` → liveness checks
//! - `/generate` → generate one code variant per style
//! - `/analyze` → line-similarity report of a submission against the variants

use crate::routes::{
    analyze::analyze_routes, generate::generate_routes, health::health_routes,
};
use axum::Router;
use util::state::AppState;

pub mod analyze;
pub mod generate;
pub mod health;

/// Builds the application router for all HTTP endpoints, bound to `app_state`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(generate_routes())
        .merge(analyze_routes())
        .with_state(app_state)
}
