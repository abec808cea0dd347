// src/api.rs
//! Fetch helpers for the dashboard server.
//!
//! Every failure is logged where it is detected and then handed back to
//! the caller unchanged. Nothing is retried or cached.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Source of HTML fragments.
///
/// `ApiClient` is the production implementation; tests plug in canned or
/// delayed responses.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_text(&self, endpoint: &str) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute endpoints pass through; anything else is joined onto the base URL.
    pub fn resolve(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// GETs `endpoint` and parses the body as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let body = self.get(endpoint).await?;
        let bytes = match body.bytes().await {
            Ok(bytes) => bytes,
            Err(source) => return Err(transport_failure(endpoint, source)),
        };

        serde_json::from_slice(&bytes).map_err(|source| {
            log::error!("Error fetching {}: invalid JSON: {}", endpoint, source);
            ApiError::Decode {
                endpoint: endpoint.to_string(),
                source,
            }
        })
    }

    /// GETs `endpoint` and returns the body as text.
    pub async fn fetch_text(&self, endpoint: &str) -> Result<String> {
        let body = self.get(endpoint).await?;
        body.text()
            .await
            .map_err(|source| transport_failure(endpoint, source))
    }

    async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = self.resolve(endpoint);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| transport_failure(endpoint, source))?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Error fetching {}: HTTP error! status: {}", endpoint, status.as_u16());
            return Err(ApiError::Http {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl Fetcher for ApiClient {
    async fn fetch_text(&self, endpoint: &str) -> Result<String> {
        ApiClient::fetch_text(self, endpoint).await
    }
}

fn transport_failure(endpoint: &str, source: reqwest::Error) -> ApiError {
    log::error!("Error fetching {}: {}", endpoint, source);
    ApiError::Transport {
        endpoint: endpoint.to_string(),
        source,
    }
}
