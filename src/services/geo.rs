//! Visitor-geolocation collaborator client
//!
//! Resolves the caller's IP to a coarse "City, Country" label for the lead
//! record. Strictly best-effort: any failure, timeout, or partial payload
//! degrades to "Unknown". Nothing here may error past its own boundary.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Clone)]
pub struct GeoClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    city: Option<String>,
    country_name: Option<String>,
}

impl GeoClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up a coarse location for `ip`. Without an IP the provider
    /// resolves the requesting address, which is only useful in dev.
    pub async fn lookup(&self, ip: Option<&str>) -> String {
        let url = match ip {
            Some(ip) if !ip.is_empty() => format!("{}/{}/json/", self.base_url, ip),
            _ => format!("{}/json/", self.base_url),
        };

        match self.fetch(&url).await {
            Ok(location) => location,
            Err(e) => {
                debug!(error = %e, "Visitor location lookup failed");
                UNKNOWN_LOCATION.to_string()
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let payload: GeoResponse = self
            .client
            .get(url)
            .send()
            .await
            .context("geolocation request failed")?
            .error_for_status()
            .context("geolocation provider error")?
            .json()
            .await
            .context("invalid geolocation payload")?;

        Ok(Self::format_location(payload))
    }

    fn format_location(payload: GeoResponse) -> String {
        let city = payload.city.filter(|c| !c.trim().is_empty());
        let country = payload.country_name.filter(|c| !c.trim().is_empty());
        match (city, country) {
            (Some(city), Some(country)) => format!("{city}, {country}"),
            (None, Some(country)) => country,
            _ => UNKNOWN_LOCATION.to_string(),
        }
    }

    /// Reachability probe for the health endpoint.
    pub async fn health_check(&self) -> Result<()> {
        self.client
            .get(format!("{}/json/", self.base_url))
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .context("Geolocation health check failed")?
            .error_for_status()
            .context("Geolocation provider unhealthy")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_city_and_country() {
        let payload = GeoResponse {
            city: Some("Mumbai".into()),
            country_name: Some("India".into()),
        };
        assert_eq!(GeoClient::format_location(payload), "Mumbai, India");
    }

    #[test]
    fn falls_back_to_country_alone() {
        let payload = GeoResponse { city: None, country_name: Some("India".into()) };
        assert_eq!(GeoClient::format_location(payload), "India");
    }

    #[test]
    fn empty_payload_is_unknown() {
        let payload = GeoResponse { city: Some("  ".into()), country_name: None };
        assert_eq!(GeoClient::format_location(payload), UNKNOWN_LOCATION);
    }
}
