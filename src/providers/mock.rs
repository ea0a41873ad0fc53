/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different backend behaviors:
 * - `MockProvider::working()` - Translates with the real pipeline
 * - `MockProvider::intermittent(n)` - Fails every nth request
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::accents_unavailable()` - Translates, but cannot list accents
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::accents::{self, AccentCatalog};
use crate::errors::{ProviderError, TranslationError};
use crate::providers::{AccentProvider, TranslationReply};
use crate::translation::{TranslationPipeline, TranslationRequest};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
    /// Translation works, accent listing fails
    AccentsUnavailable,
    /// Answers after a delay, for exercising caller-side timeouts
    Slow { delay_ms: u64 },
}

/// Mock provider for testing client behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared between clones
    request_count: Arc<AtomicUsize>,
    /// Custom translated text generator (optional)
    custom_response: Option<fn(&TranslationRequest) -> String>,
    pipeline: TranslationPipeline,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
            pipeline: TranslationPipeline::default(),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create an intermittently failing mock provider
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock whose accent listing always errors
    pub fn accents_unavailable() -> Self {
        Self::new(MockBehavior::AccentsUnavailable)
    }

    /// Set a custom translated text generator
    pub fn with_custom_response(mut self, generator: fn(&TranslationRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests received so far, across clones
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn simulated_failure(message: impl Into<String>, status_code: u16) -> TranslationError {
        ProviderError::ApiError {
            status_code,
            message: message.into(),
        }
        .into()
    }

    fn respond(&self, request: &TranslationRequest) -> Result<TranslationReply, TranslationError> {
        let mut reply = TranslationReply::from(self.pipeline.translate_request(request)?);
        if let Some(generator) = self.custom_response {
            reply.translated_text = generator(request);
        }
        Ok(reply)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            custom_response: self.custom_response,
            pipeline: self.pipeline.clone(),
        }
    }
}

#[async_trait]
impl AccentProvider for MockProvider {
    async fn translate(&self, request: TranslationRequest) -> Result<TranslationReply, TranslationError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working | MockBehavior::AccentsUnavailable => self.respond(&request),

            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == fail_every - 1 {
                    Err(Self::simulated_failure(
                        format!("Simulated intermittent failure (request #{})", count + 1),
                        503,
                    ))
                } else {
                    self.respond(&request)
                }
            }

            MockBehavior::Failing => Err(Self::simulated_failure("Simulated provider failure", 500)),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                self.respond(&request)
            }
        }
    }

    async fn available_accents(&self) -> Result<AccentCatalog, TranslationError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Failing | MockBehavior::AccentsUnavailable => {
                Err(ProviderError::ConnectionError("Simulated unreachable backend".to_string()).into())
            }
            _ => Ok(accents::catalog()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
