/*!
 * Presentation state for one translator screen.
 *
 * Holds what a front end displays between requests: the selected accents,
 * the input and output text, the loading flag and the last error. None of
 * it is visible to the translation core, which only sees explicit requests.
 */

use crate::accents::AccentDescriptor;
use crate::providers::TranslationReply;
use crate::translation::ToneDescriptor;

pub const MISSING_INPUT_MESSAGE: &str = "Please provide text input and select accents";
pub const EMPTY_TRANSLATION_PLACEHOLDER: &str = "No translation returned";

/// State of the translator front end
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslatorSession {
    pub available_accents: Vec<String>,
    pub source_accent: String,
    pub target_accent: String,
    pub original_text: String,
    pub translated_text: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub voice_info: Option<AccentDescriptor>,
    pub tone_info: Option<ToneDescriptor>,
}

impl TranslatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the accent list and select the first two accents as source and target
    ///
    /// With a single accent, source and target are the same.
    pub fn set_accents(&mut self, accents: Vec<String>) {
        if let Some(first) = accents.first() {
            self.source_accent = first.clone();
            self.target_accent = accents.get(1).unwrap_or(first).clone();
        }
        self.available_accents = accents;
    }

    pub fn select_source(&mut self, accent: impl Into<String>) {
        self.source_accent = accent.into();
    }

    pub fn select_target(&mut self, accent: impl Into<String>) {
        self.target_accent = accent.into();
    }

    pub fn set_original_text(&mut self, text: impl Into<String>) {
        self.original_text = text.into();
    }

    /// True when a translation can be requested
    pub fn can_translate(&self) -> bool {
        !self.is_loading
            && !self.original_text.is_empty()
            && !self.source_accent.is_empty()
            && !self.target_accent.is_empty()
    }

    /// Start a request; fails with the user-facing message when input is missing
    pub fn begin_translation(&mut self) -> Result<(), String> {
        if self.original_text.is_empty() || self.source_accent.is_empty() || self.target_accent.is_empty() {
            self.error = Some(MISSING_INPUT_MESSAGE.to_string());
            return Err(MISSING_INPUT_MESSAGE.to_string());
        }

        self.is_loading = true;
        self.error = None;
        Ok(())
    }

    /// Record a successful translation
    ///
    /// Voice and tone missing from the reply keep their previous values.
    pub fn complete(&mut self, reply: impl Into<TranslationReply>) {
        let reply = reply.into();
        self.translated_text = if reply.translated_text.is_empty() {
            EMPTY_TRANSLATION_PLACEHOLDER.to_string()
        } else {
            reply.translated_text
        };
        if let Some(voice_info) = reply.voice_info {
            self.voice_info = Some(voice_info);
        }
        if let Some(tone_info) = reply.tone_info {
            self.tone_info = Some(tone_info);
        }
        self.is_loading = false;
    }

    /// Record a failed translation
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.is_loading = false;
    }

    /// Reset texts and results, keeping the accent selection
    pub fn clear_all(&mut self) {
        self.original_text.clear();
        self.translated_text.clear();
        self.error = None;
        self.voice_info = None;
        self.tone_info = None;
    }
}
