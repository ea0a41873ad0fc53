use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::time::Duration;

use crate::accent_client::{self, AccentClient};
use crate::accents;
use crate::app_config::Config;
use crate::errors::TranslationError;
use crate::session::TranslatorSession;
use crate::speech::{SpeechSynthesizer, Utterance};
use crate::translation::TranslationResult;

// @module: Application controller for accent translation

/// Main application controller tying client, session and speech together
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Translation backend
    client: AccentClient,
    // @field: Presentation state
    session: TranslatorSession,
    // @field: Show a spinner while translating
    show_progress: bool,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let client = AccentClient::from_config(&config.service, &config.tone)?;
        Ok(Self::with_client(config, client))
    }

    // @method: Create a controller around an existing client
    pub fn with_client(config: Config, client: AccentClient) -> Self {
        let mut session = TranslatorSession::new();
        session.select_source(config.source_accent.clone());
        session.select_target(config.target_accent.clone());

        Self {
            config,
            client,
            session,
            show_progress: false,
        }
    }

    /// Enable or disable the loading spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &AccentClient {
        &self.client
    }

    pub fn session(&self) -> &TranslatorSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TranslatorSession {
        &mut self.session
    }

    /// Fetch the accent list into the session, keeping configured accents selected when offered
    pub async fn load_accents(&mut self) -> Vec<String> {
        let catalog = self.client.available_accents().await;
        let accents = catalog.accents.clone();
        debug!("Loaded {} accents from {} provider", accents.len(), self.client.provider_name());

        self.session.set_accents(accents.clone());
        if accents.contains(&self.config.source_accent) {
            self.session.select_source(self.config.source_accent.clone());
        }
        if accents.contains(&self.config.target_accent) {
            self.session.select_target(self.config.target_accent.clone());
        }

        accents
    }

    /// Translate `text` with the session's accents and record the outcome
    pub async fn translate(&mut self, text: &str) -> Result<TranslationResult, TranslationError> {
        self.session.set_original_text(text);
        self.session
            .begin_translation()
            .map_err(TranslationError::InvalidInput)?;

        let spinner = self.show_progress.then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message("Translating...");
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });

        let outcome = self
            .client
            .translate(text, &self.session.source_accent, &self.session.target_accent)
            .await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        match outcome {
            Ok(reply) => {
                let translated_text = reply.translated_text.clone();
                self.session.complete(reply);

                // Fields the backend left out come from the session, then the lexicon
                let result = TranslationResult {
                    translated_text,
                    voice_info: self
                        .session
                        .voice_info
                        .clone()
                        .unwrap_or_else(|| accents::lookup_or_default(&self.session.target_accent).clone()),
                    tone_info: self.session.tone_info.unwrap_or_default(),
                };

                info!(
                    "Translated {} -> {}",
                    self.session.source_accent, result.voice_info.id
                );
                Ok(result)
            }
            Err(e) => {
                self.session.fail(accent_client::user_message(&e));
                Err(e)
            }
        }
    }

    /// Speak a translation through `synthesizer`
    pub fn speak(&self, result: &TranslationResult, synthesizer: &mut dyn SpeechSynthesizer) -> Result<Utterance> {
        let utterance = Utterance::plan(result, &synthesizer.voices(), &self.config.speech);
        synthesizer.speak(&utterance)?;
        Ok(utterance)
    }

    /// Clear texts and results from the session
    pub fn clear(&mut self) {
        self.session.clear_all();
    }
}
