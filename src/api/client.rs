//! HTTP API Client
//!
//! Fetches the runtime configuration with a single GET: no retry, no
//! timeout beyond the browser's own.

use gloo_net::http::Request;

use crate::bootstrap::ConfigSource;
use crate::config::RuntimeConfig;
use crate::error::ConfigError;

/// Fetch and parse the runtime configuration document
pub async fn fetch_runtime_config(url: &str) -> Result<RuntimeConfig, ConfigError> {
    tracing::debug!(url, "fetching runtime configuration");

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ConfigError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ConfigError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(RuntimeConfig(value))
}

/// Configuration source backed by an HTTP endpoint
#[derive(Clone, Debug)]
pub struct HttpConfigSource {
    url: String,
}

impl HttpConfigSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ConfigSource for HttpConfigSource {
    async fn load(&self) -> Result<RuntimeConfig, ConfigError> {
        fetch_runtime_config(&self.url).await
    }
}
