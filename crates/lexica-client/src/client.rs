use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use lexica_config::network::NetworkConfig;
use lexica_types::DictionaryEntry;

use crate::error::LookupError;

/// Lookup backend seam; the controller only sees this trait.
#[async_trait]
pub trait Lookup: Send + Sync {
    /// Fetch all entries for a term. The term is sent as-is (trimmed but not
    /// lower-cased); case handling is the service's business.
    async fn entries(&self, term: &str) -> Result<Vec<DictionaryEntry>, LookupError>;
}

#[derive(Clone)]
pub struct DictionaryClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictionaryClient {
    pub fn new(config: &NetworkConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch_entries(&self, term: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let url = format!("{}/{}", self.base_url, term.trim());

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::debug!("lookup transport failure: {e}");
            LookupError::RequestFailed
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(LookupError::NotFound),
            status if !status.is_success() => {
                tracing::debug!("lookup failed with status {status}");
                Err(LookupError::RequestFailed)
            }
            _ => response.json::<Vec<DictionaryEntry>>().await.map_err(|e| {
                tracing::debug!("lookup response parse failure: {e}");
                LookupError::RequestFailed
            }),
        }
    }
}

#[async_trait]
impl Lookup for DictionaryClient {
    async fn entries(&self, term: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        self.fetch_entries(term).await
    }
}
