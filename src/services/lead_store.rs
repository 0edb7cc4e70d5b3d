//! Lead-store collaborator client
//!
//! Hands a completed `ContactRecord` to the studio's lead-storage webhook.
//! The contract is deliberately narrow: deliver the flat record at most once
//! per user action, report boolean success. Whatever lives behind the
//! endpoint (the spreadsheet plumbing, auth against it) is not our concern.
//! No retries: a failed hand-off is terminal for that submission.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use crate::domain::leads::ContactRecord;
use crate::error::ApiError;

#[derive(Clone)]
pub struct LeadStoreClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl LeadStoreClient {
    pub fn new(endpoint: &str, token: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(endpoint = endpoint, "Lead store client initialized");

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Deliver one record. Exactly one attempt; the caller surfaces a
    /// generic retryable outcome on failure.
    pub async fn append(
        &self,
        record: &ContactRecord,
        request_id: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut req = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json");

        if let Some(rid) = request_id {
            req = req.header("x-request-id", rid);
        }

        debug!(lead_ref = %record.lead_ref, "Handing lead record to store");

        let response = req.json(record).send().await.map_err(|e| {
            error!(error = %e, lead_ref = %record.lead_ref, "Lead store request failed");
            ApiError::Upstream(anyhow::anyhow!("Lead store unavailable: {}", e))
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(lead_ref = %record.lead_ref, "Lead record stored");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, lead_ref = %record.lead_ref, "Lead store rejected record");

        Err(ApiError::Upstream(anyhow::anyhow!(
            "Lead store error: {}",
            status
        )))
    }

    /// Reachability probe. The collaborator answers CORS preflights, so an
    /// OPTIONS round-trip is enough to know it is up.
    pub async fn health_check(&self) -> Result<()> {
        self.client
            .request(reqwest::Method::OPTIONS, &self.endpoint)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .context("Lead store health check failed")?
            .error_for_status()
            .context("Lead store unhealthy")?;

        Ok(())
    }
}
