use anyhow::{anyhow, Result};
use isolang::Language;

/// Language utilities for speech voice language tags
///
/// Voice languages are BCP-47 style tags such as `en-GB`: an ISO 639-1
/// primary language subtag and an optional two-letter region. Platforms
/// disagree on separators and case (`en_gb`, `EN-GB`), so comparisons go
/// through `normalize_voice_lang`.
/// A parsed voice language tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceLang {
    /// ISO 639-1 primary language, lowercase
    pub language: String,
    /// ISO 3166 region, uppercase
    pub region: Option<String>,
}

impl std::fmt::Display for VoiceLang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

/// Parse and validate a voice language tag
pub fn parse_voice_lang(tag: &str) -> Result<VoiceLang> {
    let normalized = tag.trim().replace('_', "-");
    let mut parts = normalized.split('-');

    let language = parts.next().unwrap_or_default().to_lowercase();
    if language.len() != 2 || Language::from_639_1(&language).is_none() {
        return Err(anyhow!("Invalid voice language: {}", tag));
    }

    let region = match parts.next() {
        Some(region) if region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()) => {
            Some(region.to_uppercase())
        }
        Some(_) => return Err(anyhow!("Invalid region in voice language: {}", tag)),
        None => None,
    };

    if parts.next().is_some() {
        return Err(anyhow!("Unsupported voice language tag: {}", tag));
    }

    Ok(VoiceLang { language, region })
}

/// Canonical `ll-RR` form of a tag, or the trimmed input when it does not parse
pub fn normalize_voice_lang(tag: &str) -> String {
    match parse_voice_lang(tag) {
        Ok(lang) => lang.to_string(),
        Err(_) => tag.trim().to_string(),
    }
}

/// Check if two voice language tags name the same language and region
pub fn voice_langs_match(tag1: &str, tag2: &str) -> bool {
    if tag1.trim().is_empty() || tag2.trim().is_empty() {
        return false;
    }
    normalize_voice_lang(tag1) == normalize_voice_lang(tag2)
}

/// Get the English language name from a voice language tag
pub fn get_language_name(tag: &str) -> Result<String> {
    let parsed = parse_voice_lang(tag)?;
    let lang = Language::from_639_1(&parsed.language)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", parsed.language))?;

    Ok(lang.to_name().to_string())
}
