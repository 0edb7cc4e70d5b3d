pub mod estimate;
pub mod health;
pub mod leads;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        // Estimate calculator
        .route("/estimate", post(estimate::compute_estimate))
        // Lead capture
        .route("/leads", post(leads::submit_lead))
        .route("/leads/validate", post(leads::validate_fields))
}
