//! Thin reqwest wrapper for the catalog proxy.

use anyhow::{Context, Result};
use cinegrid_model::ApiEnvelope;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// Non-success responses from the proxy, surfaced through `anyhow`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("empty response from server")]
    EmptyData,
}

/// HTTP client for the catalog proxy. Every endpoint responds with a JSON
/// `{ data }` envelope which this client unwraps.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid API base URL: {base_url}"))?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("failed to create HTTP client")?;

        tracing::info!(%base_url, "creating catalog API client");

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `path` with `query`, unwrapping the `{ data }` envelope.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");

        let response = self.client.get(url).query(query).send().await?;
        match response.status() {
            StatusCode::OK => {
                let envelope: ApiEnvelope<T> = response.json().await?;
                envelope.data.ok_or_else(|| ApiError::EmptyData.into())
            }
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                Err(ApiError::Status { status, body }.into())
            }
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        // Url::join treats a base without a trailing slash as a file; make
        // "http://host/api" + "movies/550" resolve the obvious way.
        let mut base = self.base_url.clone();
        {
            let mut segments = base
                .path_segments_mut()
                .map_err(|_| anyhow::anyhow!("API base URL cannot be a base"))?;
            segments.pop_if_empty();
            for segment in path.trim_start_matches('/').split('/') {
                segments.push(segment);
            }
        }
        Ok(base)
    }
}
