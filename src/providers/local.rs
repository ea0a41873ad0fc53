/*!
 * In-process provider backed by the translation pipeline.
 */

use async_trait::async_trait;
use log::debug;
use std::time::Duration;

use crate::accents::{self, AccentCatalog};
use crate::errors::TranslationError;
use crate::providers::{AccentProvider, TranslationReply};
use crate::translation::{CountingPolicy, TranslationPipeline, TranslationRequest};

/// Runs translations locally, optionally simulating network latency
#[derive(Debug, Clone, Default)]
pub struct LocalProvider {
    pipeline: TranslationPipeline,
    /// Delay before a translation resolves; accent listing waits half as long
    latency: Duration,
}

impl LocalProvider {
    pub fn new(policy: CountingPolicy) -> Self {
        Self {
            pipeline: TranslationPipeline::new(policy),
            latency: Duration::ZERO,
        }
    }

    /// Set the simulated latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn pipeline(&self) -> &TranslationPipeline {
        &self.pipeline
    }

    async fn simulate_latency(&self, delay: Duration) {
        if !delay.is_zero() {
            debug!("Simulating {}ms of latency", delay.as_millis());
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl AccentProvider for LocalProvider {
    async fn translate(&self, request: TranslationRequest) -> Result<TranslationReply, TranslationError> {
        self.simulate_latency(self.latency).await;
        self.pipeline.translate_request(&request).map(TranslationReply::from)
    }

    async fn available_accents(&self) -> Result<AccentCatalog, TranslationError> {
        self.simulate_latency(self.latency / 2).await;
        Ok(accents::catalog())
    }

    fn name(&self) -> &str {
        "local"
    }
}
