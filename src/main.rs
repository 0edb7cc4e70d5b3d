mod api;
mod app;
mod config;
mod domain;
mod error;
mod logging;
mod middleware;
mod routes;
mod services;

use anyhow::Result;

use services::{GeoClient, LeadStoreClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting atelier backend"
    );

    // Create collaborator clients
    let lead_store = LeadStoreClient::new(
        &settings.lead_store_url,
        &settings.lead_store_token,
        settings.lead_store_timeout_seconds,
    )?;

    let geo = GeoClient::new(&settings.geo_api_url, settings.geo_timeout_seconds)?;

    // Probe collaborators without blocking startup
    tokio::spawn({
        let lead_store = lead_store.clone();
        let geo = geo.clone();
        async move {
            match lead_store.health_check().await {
                Ok(()) => tracing::info!("Lead store is reachable"),
                Err(e) => tracing::warn!(error = %e, "Lead store probe failed - submissions will report failure until it recovers"),
            }
            match geo.health_check().await {
                Ok(()) => tracing::info!("Geolocation provider is reachable"),
                Err(e) => tracing::warn!(error = %e, "Geolocation probe failed - visitor locations will degrade to Unknown"),
            }
        }
    });

    // Create application state
    let state = app::AppState::new(settings.clone(), lead_store, geo);

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
