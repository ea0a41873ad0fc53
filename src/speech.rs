/*!
 * Speech synthesis planning.
 *
 * Turns a `TranslationResult` into an utterance: the voice is picked from
 * the synthesizer's voices using the accent's voice descriptor, and the
 * prosody follows the tone of the original text. Playback itself sits
 * behind the `SpeechSynthesizer` trait.
 */

use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::accents::AccentDescriptor;
use crate::app_config::SpeechConfig;
use crate::language_utils::voice_langs_match;
use crate::translation::{ToneDescriptor, TranslationResult, Volume};

/// A voice offered by a synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// Rate, pitch and volume multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prosody {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Prosody {
    /// Baseline prosody adjusted for `tone`
    pub fn from_tone(tone: &ToneDescriptor, settings: &SpeechConfig) -> Self {
        let rate = if tone.excitement > 0 {
            settings.excited_rate
        } else {
            settings.base_rate
        };

        let pitch = if tone.questioning > 0 {
            settings.questioning_pitch
        } else {
            settings.base_pitch
        };

        let volume = match tone.volume {
            Volume::Loud => settings.base_volume + settings.volume_offset,
            Volume::Soft => settings.base_volume - settings.volume_offset,
            Volume::Normal => settings.base_volume,
        };

        Self { rate, pitch, volume }
    }
}

/// First voice whose language matches the accent's, or whose name is its preferred voice
pub fn select_voice<'a>(voices: &'a [Voice], voice_info: &AccentDescriptor) -> Option<&'a Voice> {
    voices
        .iter()
        .find(|voice| voice_langs_match(&voice.lang, &voice_info.voice_lang) || voice.name == voice_info.voice_uri)
}

/// Everything a synthesizer needs to speak one translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub voice: Option<Voice>,
    pub prosody: Prosody,
}

impl Utterance {
    /// Plan the utterance for a translation
    pub fn plan(result: &TranslationResult, voices: &[Voice], settings: &SpeechConfig) -> Self {
        let voice = select_voice(voices, &result.voice_info).cloned();
        if voice.is_none() {
            debug!(
                "No voice matches {} / {}, using synthesizer default",
                result.voice_info.voice_lang, result.voice_info.voice_uri
            );
        }

        let lang = if result.voice_info.voice_lang.is_empty() {
            settings.fallback_lang.clone()
        } else {
            result.voice_info.voice_lang.clone()
        };

        Self {
            text: result.translated_text.clone(),
            lang,
            voice,
            prosody: Prosody::from_tone(&result.tone_info, settings),
        }
    }
}

/// Playback backend
pub trait SpeechSynthesizer {
    /// Voices available for selection
    fn voices(&self) -> Vec<Voice>;

    /// Speak an utterance, cancelling whatever is currently speaking
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;

    /// Stop the current utterance, if any
    fn cancel(&mut self);

    fn is_speaking(&self) -> bool;
}

/// Synthesizer that renders utterances as text
///
/// Rendering finishes before `speak` returns, so the synthesizer is only
/// speaking while a line is being written.
pub struct ConsoleSynthesizer<W: Write> {
    out: W,
    voices: Vec<Voice>,
    current: Option<Utterance>,
    last_spoken: Option<Utterance>,
}

impl<W: Write> ConsoleSynthesizer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            voices: default_voices(),
            current: None,
            last_spoken: None,
        }
    }

    pub fn with_voices(mut self, voices: Vec<Voice>) -> Self {
        self.voices = voices;
        self
    }

    /// The most recently completed utterance
    pub fn last_spoken(&self) -> Option<&Utterance> {
        self.last_spoken.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SpeechSynthesizer for ConsoleSynthesizer<W> {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        if self.is_speaking() {
            self.cancel();
        }

        let voice = utterance
            .voice
            .as_ref()
            .map(|v| v.name.clone())
            .unwrap_or_else(|| "default".to_string());

        info!("Speaking with voice '{}' ({})", voice, utterance.lang);
        self.current = Some(utterance.clone());

        let rendered = writeln!(
            self.out,
            "[speak lang={} voice=\"{}\" rate={:.1} pitch={:.1} volume={:.1}] {}",
            utterance.lang,
            voice,
            utterance.prosody.rate,
            utterance.prosody.pitch,
            utterance.prosody.volume,
            utterance.text
        )
        .and_then(|_| self.out.flush());

        // Playback has ended either way
        let finished = self.current.take();
        rendered?;
        self.last_spoken = finished;
        Ok(())
    }

    fn cancel(&mut self) {
        if self.current.take().is_some() {
            debug!("Cancelled current utterance");
        }
    }

    fn is_speaking(&self) -> bool {
        self.current.is_some()
    }
}

/// Voice names commonly offered by browser speech engines
pub fn default_voices() -> Vec<Voice> {
    vec![
        Voice::new("Google US English", "en-US"),
        Voice::new("Google UK English Female", "en-GB"),
        Voice::new("Google UK English Male", "en-GB"),
        Voice::new("Google español", "es-ES"),
        Voice::new("Google français", "fr-FR"),
        Voice::new("Google Deutsch", "de-DE"),
        Voice::new("Google हिन्दी", "hi-IN"),
    ]
}
