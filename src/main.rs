// This is the entry point of the sales insights server.
//
// **Architecture Overview:**
// - `core/` = Business logic (no HTTP or Google types)
// - `infra/` = Implementations of core traits (Google APIs, AI gateway)
// - `api/` = Inbound HTTP adapter (router, CORS, error envelope)
//
// This file's job is to:
// 1. Load configuration
// 2. Build the shared state (dependency injection)
// 3. Bind the listener and serve the router

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with a handful of mod.rs files that all look the same.
#[path = "api/api_layer.rs"]
mod api;
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;

use std::sync::Arc;

use crate::api::routes::{router, AppState};
use crate::infra::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // The config is the only shared state; each request builds its own
    // pipeline from it, so nothing mutable crosses request boundaries.

    let config = AppConfig::from_env();
    tracing::info!(
        google_credentials = config.google_credentials.is_some(),
        ai_api_key = config.ai_api_key.is_some(),
        "Secrets loaded"
    );

    let state = Arc::new(AppState::new(config));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = format!("0.0.0.0:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Sales insights server listening on {}", addr);

    axum::serve(listener, router(state)).await?;

    Ok(())
}
