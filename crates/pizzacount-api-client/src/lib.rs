//! Shared HTTP client for the PizzaCount processing server.
//!
//! Provides a minimal client with generic GET/multipart POST helpers and domain
//! methods (process upload, result asset fetch, report download). The upload
//! controller and the CLI use this client directly.

pub mod api;

use std::time::Duration;

use bytes::Bytes;
use pizzacount_core::{ClientConfig, RejectionBody, UploadError, UploadResult};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// HTTP client for the processing server.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> UploadResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UploadError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create client from environment. See `ClientConfig::from_env`.
    pub fn from_env() -> UploadResult<Self> {
        let config =
            ClientConfig::from_env().map_err(|e| UploadError::InvalidInput(e.to_string()))?;
        Self::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        self.config.build_url(path)
    }

    /// GET request returning the raw body.
    pub async fn get_bytes(&self, path: &str) -> UploadResult<Bytes> {
        let url = self.build_url(path);
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let response = check_status(response).await?;

        response.bytes().await.map_err(transport)
    }

    /// POST multipart form and deserialize response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> UploadResult<T> {
        let url = self.build_url(path);
        tracing::debug!(url = %url, "POST multipart");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        let response = check_status(response).await?;

        let body = response.bytes().await.map_err(transport)?;
        let parsed: T = serde_json::from_slice(&body)?;
        Ok(parsed)
    }
}

fn transport(err: reqwest::Error) -> UploadError {
    if err.is_timeout() {
        UploadError::Transport(format!("Request timed out: {}", err))
    } else if err.is_decode() || err.is_body() {
        UploadError::MalformedResponse(format!("Failed to read response body: {}", err))
    } else {
        UploadError::Transport(format!("Failed to send request: {}", err))
    }
}

/// Turn a non-2xx response into `UploadError::Rejected`, preferring the
/// server's `{"error": ...}` message over the raw body.
async fn check_status(response: Response) -> UploadResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    let message = serde_json::from_str::<RejectionBody>(&error_text)
        .map(|body| body.error)
        .unwrap_or(error_text);

    tracing::warn!(status = status.as_u16(), message = %message, "Request rejected");
    Err(UploadError::Rejected {
        status: status.as_u16(),
        message,
    })
}

// Re-export domain types for convenience.
pub use pizzacount_core::{MediaKind, ProcessResponse, ReportFormat, SelectedFile};
