mod advice_client;
mod chat;
mod config;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advice_client::HttpAdviceClient;
use crate::chat::registry::SessionRegistry;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting advisor gateway v{}", env!("CARGO_PKG_VERSION"));

    let advice = HttpAdviceClient::new(config.advice_api_url.clone(), config.advice_timeout)
        .context("Failed to build advice service HTTP client")?;
    info!(
        "Advice service client initialized ({}, timeout {}s)",
        advice.base_url(),
        config.advice_timeout.as_secs()
    );

    let sessions = SessionRegistry::new(Arc::new(advice));
    sessions.spawn_idle_sweeper(config.session_idle_ttl);
    info!(
        "Idle sessions evicted after {}s",
        config.session_idle_ttl.as_secs()
    );

    let state = AppState {
        sessions,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the UI host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
