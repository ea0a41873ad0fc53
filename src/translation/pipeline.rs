/*!
 * Translation pipeline.
 *
 * Orchestrates tone analysis, accent rewriting and tone application and
 * packages the result with the target accent's voice descriptor.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::accents::{self, AccentDescriptor};
use crate::errors::TranslationError;
use super::rewriter::AccentRewriter;
use super::tone::{apply_tone, CountingPolicy, ToneAnalyzer, ToneDescriptor};

/// Body of a translate request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    pub source_accent: String,
    pub target_accent: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, source_accent: impl Into<String>, target_accent: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_accent: source_accent.into(),
            target_accent: target_accent.into(),
        }
    }

    /// Reject empty text or accent ids
    pub fn validate(&self) -> Result<(), TranslationError> {
        if self.text.is_empty() {
            return Err(TranslationError::InvalidInput("text must not be empty".to_string()));
        }
        if self.source_accent.is_empty() {
            return Err(TranslationError::InvalidInput("source accent must not be empty".to_string()));
        }
        if self.target_accent.is_empty() {
            return Err(TranslationError::InvalidInput("target accent must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Outcome of one translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// Rewritten text with tone markers applied
    pub translated_text: String,

    /// Voice of the target accent (default accent when unknown)
    pub voice_info: AccentDescriptor,

    /// Tone of the original text
    pub tone_info: ToneDescriptor,
}

/// Pure, synchronous accent translation
#[derive(Debug, Clone, Default)]
pub struct TranslationPipeline {
    analyzer: ToneAnalyzer,
    rewriter: AccentRewriter,
}

impl TranslationPipeline {
    pub fn new(policy: CountingPolicy) -> Self {
        Self {
            analyzer: ToneAnalyzer::new(policy),
            rewriter: AccentRewriter::new(),
        }
    }

    pub fn counting_policy(&self) -> CountingPolicy {
        self.analyzer.policy()
    }

    /// Translate `text` into the target accent
    ///
    /// The source accent is validated but does not influence the result.
    pub fn translate(
        &self,
        text: &str,
        source_accent_id: &str,
        target_accent_id: &str,
    ) -> Result<TranslationResult, TranslationError> {
        let request = TranslationRequest::new(text, source_accent_id, target_accent_id);
        self.translate_request(&request)
    }

    pub fn translate_request(&self, request: &TranslationRequest) -> Result<TranslationResult, TranslationError> {
        request.validate()?;

        let tone = self.analyzer.analyze(&request.text);
        let rewritten = self.rewriter.rewrite(&request.text, &request.target_accent);
        let translated = apply_tone(&rewritten, &tone);

        if accents::lookup(&request.target_accent).is_none() {
            debug!(
                "Unknown target accent '{}', using {} voice",
                request.target_accent,
                accents::DEFAULT_ACCENT_ID
            );
        }
        let voice_info = accents::lookup_or_default(&request.target_accent).clone();

        debug!(
            "Translated {} -> {} ({} chars, tone {:?})",
            request.source_accent,
            voice_info.id,
            translated.len(),
            tone
        );

        Ok(TranslationResult {
            translated_text: translated,
            voice_info,
            tone_info: tone,
        })
    }
}
