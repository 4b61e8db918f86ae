use std::net::SocketAddr;

use anyhow::{Context, Result};
use api::app;
use common::logger::init_logging;
use tracing::info;
use util::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration and initialize logging
    let config = AppConfig::from_env().context("loading configuration")?;
    let _log_guard = init_logging(&config.log_file, &config.log_level, config.log_to_stdout);

    // Resolve mock or live mode once; it never changes afterwards
    let app_state = AppState::new(config.clone()).context("initializing application state")?;

    let addr: SocketAddr = config
        .address()
        .parse()
        .with_context(|| format!("invalid address {}", config.address()))?;

    println!(
        "Starting {} on http://{} (mock mode: {})",
        config.project_name,
        addr,
        app_state.is_mock()
    );
    info!(%addr, env = %config.env, mock = app_state.is_mock(), "Starting server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(
        listener,
        app(app_state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server crashed")
}
