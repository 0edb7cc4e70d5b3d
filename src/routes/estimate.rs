//! Cost-estimate endpoint
//!
//! Typed deserialization is the completeness gate: a request missing any
//! enum field never reaches the calculator.

use axum::{response::IntoResponse, Json};

use crate::api::DataResponse;
use crate::domain::estimate::{self, ProjectInputs};

/// POST /estimate
///
/// Compute a cost range for a fully-specified project.
pub async fn compute_estimate(Json(inputs): Json<ProjectInputs>) -> impl IntoResponse {
    let result = estimate::calculate(&inputs);

    tracing::debug!(
        scope = ?inputs.scope,
        bhk_size = ?inputs.bhk_size,
        total_low = %result.total_low,
        total_high = %result.total_high,
        "Estimate computed"
    );

    DataResponse::new(result)
}
