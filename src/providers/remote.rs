use async_trait::async_trait;
use log::error;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::accents::AccentCatalog;
use crate::errors::{ProviderError, TranslationError};
use crate::providers::{AccentProvider, TranslationReply};
use crate::translation::TranslationRequest;

/// Client for a translation service reachable over HTTP
///
/// `POST {endpoint}` with a `TranslationRequest` body translates and answers
/// with a `TranslationReply`, where only `translatedText` is expected;
/// `GET {endpoint}/accents` lists accents. Requests are never retried.
#[derive(Debug, Clone)]
pub struct RemoteProvider {
    /// Translate endpoint URL
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
}

impl RemoteProvider {
    /// Create a new client for `endpoint` with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, ProviderError> {
        let endpoint = endpoint.into();
        Url::parse(&endpoint)
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// URL of the accent list
    pub fn accents_url(&self) -> String {
        format!("{}/accents", self.endpoint.trim_end_matches('/'))
    }

    fn transport_error(e: reqwest::Error) -> ProviderError {
        if e.is_connect() || e.is_timeout() {
            ProviderError::ConnectionError(e.to_string())
        } else {
            ProviderError::RequestFailed(e.to_string())
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translation service error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response.json::<T>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl AccentProvider for RemoteProvider {
    async fn translate(&self, request: TranslationRequest) -> Result<TranslationReply, TranslationError> {
        request.validate()?;

        let response = self.client.post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        Ok(Self::read_json(response).await?)
    }

    async fn available_accents(&self) -> Result<AccentCatalog, TranslationError> {
        let response = self.client.get(self.accents_url())
            .send()
            .await
            .map_err(Self::transport_error)?;

        Ok(Self::read_json(response).await?)
    }

    fn name(&self) -> &str {
        "remote"
    }
}
