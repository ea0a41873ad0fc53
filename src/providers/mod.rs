/*!
 * Provider implementations for the translation backend.
 *
 * This module contains the backends an `AccentClient` can talk to:
 * - Local: runs the translation pipeline in process
 * - Remote: translation service over HTTP
 * - Mock: scripted behaviors for tests
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::accents::{AccentCatalog, AccentDescriptor};
use crate::errors::TranslationError;
use crate::translation::{ToneDescriptor, TranslationRequest, TranslationResult};

/// Translation as returned by a backend
///
/// A service may answer with only the translated text; missing fields are
/// left for the caller to fill from what it already has.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationReply {
    #[serde(default)]
    pub translated_text: String,

    #[serde(default)]
    pub voice_info: Option<AccentDescriptor>,

    #[serde(default)]
    pub tone_info: Option<ToneDescriptor>,
}

impl From<TranslationResult> for TranslationReply {
    fn from(result: TranslationResult) -> Self {
        Self {
            translated_text: result.translated_text,
            voice_info: Some(result.voice_info),
            tone_info: Some(result.tone_info),
        }
    }
}

/// Common trait for all translation backends
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably by the client.
#[async_trait]
pub trait AccentProvider: Send + Sync + Debug {
    /// Translate a request
    ///
    /// # Arguments
    /// * `request` - Text plus source and target accent ids
    ///
    /// # Returns
    /// * `Result<TranslationReply, TranslationError>` - The translation or an error
    async fn translate(&self, request: TranslationRequest) -> Result<TranslationReply, TranslationError>;

    /// Fetch the accents the backend supports
    async fn available_accents(&self) -> Result<AccentCatalog, TranslationError>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

pub mod local;
pub mod mock;
pub mod remote;

pub use local::LocalProvider;
pub use mock::{MockBehavior, MockProvider};
pub use remote::RemoteProvider;
