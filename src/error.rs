//! Unified API error handling
//!
//! Consistent error responses across all endpoints. Field-level validation
//! problems are not errors in this sense; they travel in the submission
//! responses. This covers malformed requests, collaborator failures, and
//! genuine internal faults.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream collaborator failed")]
    Upstream(#[source] anyhow::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Upstream(_) => "UPSTREAM_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            // One generic retryable message; collaborator details stay in the logs
            Self::Upstream(_) => {
                "Could not submit your request right now. Please try again.".to_string()
            }
            Self::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = ?e, "Internal server error");
            }
            Self::Upstream(e) => {
                tracing::error!(error = ?e, "Collaborator failure");
            }
            _ => {
                tracing::warn!(error = %self, "API error");
            }
        }

        let status = self.status_code();
        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.public_message(),
            request_id: None, // Populated by middleware if available
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_is_generic() {
        let error = ApiError::Upstream(anyhow::anyhow!("sheet quota exceeded"));
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
        assert!(!error.public_message().contains("quota"));
    }

    #[test]
    fn bad_request_message_passes_through() {
        let error = ApiError::BadRequest("missing body".into());
        assert_eq!(error.public_message(), "missing body");
    }
}
