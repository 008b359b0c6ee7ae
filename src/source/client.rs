use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::records::{RecordDetail, RecordId, RecordResponse, RecordSummary, RecordsResponse};
use crate::source::{FetchError, RecordSource};

/// HTTP client for the record backend.
#[derive(Clone)]
pub struct RecordsClient {
    client: Client,
    base_url: String,
}

impl RecordsClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        Self::with_base_url(config, &config.base_url)
    }

    /// Build a client for `base_url`, taking timeouts from `config`.
    pub fn with_base_url(config: &ClientConfig, base_url: &str) -> Result<Self, FetchError> {
        if base_url.is_empty() {
            return Err(FetchError::Config("base_url is empty".to_string()));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let response = ensure_success(&url, response).await.inspect_err(|err| {
            if err.is_server_error() {
                tracing::warn!(url = %url, "backend error: {}", err);
            }
        })?;
        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode { url, source })
    }
}

/// Turn a non-2xx response into `FetchError::Status`, preferring the
/// server's JSON error message when there is one.
async fn ensure_success(url: &str, response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    Err(FetchError::Status {
        url: url.to_string(),
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RecordSource for RecordsClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn list(&self) -> Result<Vec<RecordSummary>, FetchError> {
        let envelope: RecordsResponse = self.get_json("/records").await?;
        Ok(envelope.records)
    }

    async fn detail(&self, id: &RecordId) -> Result<Option<RecordDetail>, FetchError> {
        let envelope: RecordResponse = self.get_json(&format!("/records/{}", id)).await?;
        Ok(envelope.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_is_rejected() {
        let config = ClientConfig {
            base_url: String::new(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            RecordsClient::new(&config),
            Err(FetchError::Config(_))
        ));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::default();
        let client = RecordsClient::with_base_url(&config, "http://127.0.0.1:9000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    }
}
