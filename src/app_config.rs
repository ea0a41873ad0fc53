use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;
use url::Url;

use crate::errors::AppError;
use crate::translation::CountingPolicy;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Accent the input is spoken in
    #[serde(default = "default_source_accent")]
    pub source_accent: String,

    /// Accent to translate into
    #[serde(default = "default_target_accent")]
    pub target_accent: String,

    /// Tone analysis settings
    #[serde(default)]
    pub tone: ToneConfig,

    /// Translation backend settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Speech synthesis settings
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Where translations are computed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    // @mode: In-process pipeline
    #[default]
    Local,
    // @mode: HTTP translation service
    Remote,
}

impl std::fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

impl std::str::FromStr for ServiceMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            _ => Err(anyhow!("Invalid service mode: {}", s)),
        }
    }
}

/// Tone analysis configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ToneConfig {
    /// How overlapping punctuation markers are counted
    #[serde(default)]
    pub counting_policy: CountingPolicy,
}

/// Translation backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    // @field: Local pipeline or remote service
    #[serde(default)]
    pub mode: ServiceMode,

    // @field: Translate endpoint URL (remote mode)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Request timeout seconds (remote mode)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Artificial delay for local translations
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            mode: ServiceMode::default(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            simulated_latency_ms: 0,
        }
    }
}

/// Speech synthesis configuration
///
/// Rates, pitches and volumes are multipliers where 1.0 is the synthesizer's
/// normal output.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpeechConfig {
    #[serde(default = "default_baseline")]
    pub base_rate: f32,

    #[serde(default = "default_baseline")]
    pub base_pitch: f32,

    #[serde(default = "default_baseline")]
    pub base_volume: f32,

    /// Rate used when the text is excited
    #[serde(default = "default_raised")]
    pub excited_rate: f32,

    /// Pitch used when the text asks a question
    #[serde(default = "default_raised")]
    pub questioning_pitch: f32,

    /// Added for loud text, subtracted for soft text
    #[serde(default = "default_volume_offset")]
    pub volume_offset: f32,

    /// Language used when an accent has no voice language
    #[serde(default = "default_fallback_lang")]
    pub fallback_lang: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_rate: default_baseline(),
            base_pitch: default_baseline(),
            base_volume: default_baseline(),
            excited_rate: default_raised(),
            questioning_pitch: default_raised(),
            volume_offset: default_volume_offset(),
            fallback_lang: default_fallback_lang(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_accent() -> String {
    "American".to_string()
}

fn default_target_accent() -> String {
    "British".to_string()
}

fn default_endpoint() -> String {
    "https://api.example.com/translate".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_baseline() -> f32 {
    1.0
}

fn default_raised() -> f32 {
    1.2
}

fn default_volume_offset() -> f32 {
    0.2
}

fn default_fallback_lang() -> String {
    "en-US".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.source_accent.trim().is_empty() {
            return Err(anyhow!("Source accent must not be empty"));
        }
        if self.target_accent.trim().is_empty() {
            return Err(anyhow!("Target accent must not be empty"));
        }

        if self.service.mode == ServiceMode::Remote {
            if self.service.timeout_secs == 0 {
                return Err(anyhow!("Service timeout must be greater than zero"));
            }

            let url = Url::parse(&self.service.endpoint)
                .with_context(|| format!("Invalid service endpoint: {}", self.service.endpoint))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(anyhow!("Service endpoint must use http or https: {}", self.service.endpoint));
            }
        }

        crate::language_utils::parse_voice_lang(&self.speech.fallback_lang)
            .context("Invalid speech fallback language")?;

        for (name, value) in [
            ("base_rate", self.speech.base_rate),
            ("base_pitch", self.speech.base_pitch),
            ("excited_rate", self.speech.excited_rate),
            ("questioning_pitch", self.speech.questioning_pitch),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(anyhow!("Speech {} must be a positive number, got {}", name, value));
            }
        }

        if !(self.speech.volume_offset.is_finite() && self.speech.volume_offset >= 0.0) {
            return Err(anyhow!("Speech volume_offset must not be negative"));
        }

        Ok(())
    }

    /// Validate, reporting failures as `AppError::Config`
    pub fn ensure_valid(&self) -> std::result::Result<(), AppError> {
        self.validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_accent: default_source_accent(),
            target_accent: default_target_accent(),
            tone: ToneConfig::default(),
            service: ServiceConfig::default(),
            speech: SpeechConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
