/*!
 * Client facade over a translation provider.
 *
 * Applies the boundary error policy: a failed accent-list fetch falls back
 * to the static accent table, a failed translation is reported once and
 * never retried.
 */

use anyhow::Result;
use log::{debug, error, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::accents::{self, AccentCatalog};
use crate::app_config::{ServiceConfig, ServiceMode, ToneConfig};
use crate::errors::TranslationError;
use crate::providers::{AccentProvider, LocalProvider, RemoteProvider, TranslationReply};
use crate::translation::TranslationRequest;

/// Message shown to users when a translation fails for a non-input reason
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to translate accent. Please try again.";

/// Translation client used by the application layer
#[derive(Debug, Clone)]
pub struct AccentClient {
    provider: Arc<dyn AccentProvider>,
}

impl AccentClient {
    /// Wrap an existing provider
    pub fn new(provider: Arc<dyn AccentProvider>) -> Self {
        Self { provider }
    }

    /// Build the provider selected by the service configuration
    pub fn from_config(service: &ServiceConfig, tone: &ToneConfig) -> Result<Self> {
        let provider: Arc<dyn AccentProvider> = match service.mode {
            ServiceMode::Local => Arc::new(
                LocalProvider::new(tone.counting_policy)
                    .with_latency(Duration::from_millis(service.simulated_latency_ms)),
            ),
            ServiceMode::Remote => Arc::new(RemoteProvider::new(&service.endpoint, service.timeout_secs)?),
        };

        debug!("Using {} translation provider", provider.name());
        Ok(Self::new(provider))
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Accent catalog from the provider, or the static table when it fails
    pub async fn available_accents(&self) -> AccentCatalog {
        match self.provider.available_accents().await {
            Ok(catalog) if !catalog.is_empty() => catalog,
            Ok(_) => {
                warn!("Provider '{}' returned no accents, using built-in list", self.provider.name());
                accents::catalog()
            }
            Err(e) => {
                warn!("Error fetching available accents: {}. Using built-in list", e);
                accents::catalog()
            }
        }
    }

    /// Translate once; no retry on failure
    pub async fn translate(
        &self,
        text: &str,
        source_accent: &str,
        target_accent: &str,
    ) -> Result<TranslationReply, TranslationError> {
        let request = TranslationRequest::new(text, source_accent, target_accent);
        self.provider.translate(request).await.inspect_err(|e| {
            error!("Error translating accent: {}", e);
        })
    }
}

/// User-facing message for a translation error
pub fn user_message(error: &TranslationError) -> String {
    match error {
        TranslationError::InvalidInput(reason) => format!("Invalid input: {}", reason),
        TranslationError::Provider(_) => GENERIC_FAILURE_MESSAGE.to_string(),
    }
}
