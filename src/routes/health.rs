use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceHealth,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub lead_store: String,
    pub geolocation: String,
}

/// Health check endpoint - public
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    // Probe both collaborators in parallel
    let (store_result, geo_result) = tokio::join!(
        state.lead_store.health_check(),
        state.geo.health_check(),
    );

    let store_status = if store_result.is_ok() { "ok" } else { "error" };
    let geo_status = if geo_result.is_ok() { "ok" } else { "error" };

    // The lead store is critical; geolocation only degrades to "Unknown"
    let status = if store_result.is_ok() && geo_result.is_ok() {
        "healthy"
    } else if store_result.is_ok() {
        "degraded"
    } else {
        "unhealthy"
    };

    let status_code = if status == "unhealthy" {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            services: ServiceHealth {
                lead_store: store_status.to_string(),
                geolocation: geo_status.to_string(),
            },
        }),
    )
}
