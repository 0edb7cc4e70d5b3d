//! Lead submission endpoints
//!
//! `POST /leads` runs the submission gate: validate contact fields, enrich
//! with best-effort metadata, recompute the estimate server-side, and hand
//! the record to the lead store. `POST /leads/validate` exposes the field
//! validators for live form feedback.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{headers::UserAgent, TypedHeader};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::device::{detect_browser, detect_device_type};
use crate::domain::email;
use crate::domain::estimate::{self, EstimateResult};
use crate::domain::leads::{
    validate_submission, ContactRecord, FieldError, FieldWarning, LeadIntent, SubmitLeadRequest,
    SubmissionMetadata,
};
use crate::domain::name;
use crate::domain::phone::{self, PhoneValidation};
use crate::domain::validation::ValidationResult;
use crate::error::ApiResult;
use crate::middleware::RequestIdExt;

#[derive(Debug, Serialize)]
pub struct LeadAccepted {
    pub success: bool,
    pub lead_ref: Uuid,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FieldWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<EstimateResult>,
}

/// Rejection payload. `notify_user` tells the form whether to toast: the
/// estimate flow validates proactively before submitting, so a rejection
/// there stays silent.
#[derive(Debug, Serialize)]
pub struct LeadRejected {
    pub success: bool,
    pub notify_user: bool,
    pub errors: Vec<FieldError>,
}

/// First hop of `x-forwarded-for`, else `x-real-ip`.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return Some(first.to_string());
            }
        }
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
}

/// POST /leads
///
/// The submission gate. One hand-off to the lead store per call; a store
/// failure maps to a single generic retryable outcome.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    user_agent: Option<TypedHeader<UserAgent>>,
    Json(request): Json<SubmitLeadRequest>,
) -> ApiResult<Response> {
    let contact = match validate_submission(&request) {
        Ok(contact) => contact,
        Err(errors) => {
            tracing::info!(
                intent = ?request.intent,
                fields = ?errors.iter().map(|e| e.field).collect::<Vec<_>>(),
                "Lead submission rejected"
            );
            let rejection = LeadRejected {
                success: false,
                notify_user: request.intent == LeadIntent::DesignerConsultation,
                errors,
            };
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(rejection)).into_response());
        }
    };

    // Best-effort enrichment; every part degrades independently
    let ua = user_agent.as_ref().map(|h| h.as_str()).unwrap_or("");
    let metadata = SubmissionMetadata {
        device_type: detect_device_type(ua),
        browser: detect_browser(ua),
        visitor_location: state.geo.lookup(client_ip(&headers).as_deref()).await,
    };

    // Never trust client-side figures; recompute from the submitted inputs
    let computed = request.project.as_ref().map(estimate::calculate);

    let record = ContactRecord::assemble(&contact, &request, &metadata, computed.as_ref());
    let lead_ref = record.lead_ref;

    state.lead_store.append(&record, headers.request_id()).await?;

    tracing::info!(%lead_ref, intent = ?request.intent, "Lead submitted");

    Ok(Json(LeadAccepted {
        success: true,
        lead_ref,
        warnings: contact.warnings,
        estimate: computed,
    })
    .into_response())
}

#[derive(Debug, Deserialize)]
pub struct FieldCheckRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FieldCheckResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ValidationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<ValidationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneValidation>,
}

/// POST /leads/validate
///
/// Run the field validators without submitting, for as-you-type feedback.
/// Only the fields present in the request are checked.
pub async fn validate_fields(Json(request): Json<FieldCheckRequest>) -> impl IntoResponse {
    DataResponse::new(FieldCheckResponse {
        name: request.name.as_deref().map(name::validate),
        email: request.email.as_deref().map(email::validate),
        phone: request
            .phone
            .as_deref()
            .map(|raw| phone::validate(raw, request.city.as_deref())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn client_ip_prefers_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_ip(&headers).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn client_ip_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));
        assert_eq!(client_ip(&headers).as_deref(), Some("198.51.100.4"));
    }

    #[test]
    fn client_ip_absent_when_no_headers() {
        assert_eq!(client_ip(&HeaderMap::new()), None);
    }
}
