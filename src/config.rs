use anyhow::{Context, Result};
use std::env;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Lead store collaborator
    pub lead_store_url: String,
    pub lead_store_token: String,
    pub lead_store_timeout_seconds: u64,

    // Geolocation collaborator
    pub geo_api_url: String,
    pub geo_timeout_seconds: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Lead store collaborator
        let lead_store_url = env::var("LEAD_STORE_URL").context("LEAD_STORE_URL must be set")?;
        Url::parse(&lead_store_url).context("LEAD_STORE_URL is not a valid URL")?;
        let lead_store_token =
            env::var("LEAD_STORE_TOKEN").context("LEAD_STORE_TOKEN must be set")?;
        let lead_store_timeout_seconds = env::var("LEAD_STORE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        // Geolocation collaborator
        let geo_api_url =
            env::var("GEO_API_URL").unwrap_or_else(|_| "https://ipapi.co".to_string());
        Url::parse(&geo_api_url).context("GEO_API_URL is not a valid URL")?;
        let geo_timeout_seconds = env::var("GEO_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3); // Best effort, keep it short

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            lead_store_url,
            lead_store_token,
            lead_store_timeout_seconds,
            geo_api_url,
            geo_timeout_seconds,
        })
    }
}
