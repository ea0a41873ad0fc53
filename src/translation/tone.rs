/*!
 * Tone analysis and tone application.
 *
 * Tone is read from punctuation in the original text and written back onto
 * the rewritten text as trailing punctuation, so the emotional shape of the
 * input survives the accent substitution.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};

const EXCITEMENT_MARKERS: &[&str] = &["!", "!!", "!!!"];
const QUESTIONING_MARKERS: &[&str] = &["?", "??", "???"];
const EMPHASIS_MARKERS: &[&str] = &["*", "**", "***"];
const PAUSE_MARKERS: &[&str] = &[",", ";", ".", "..."];

/// Volume groups, checked in order; a later match overwrites an earlier one
const VOLUME_MARKERS: &[(Volume, &[&str])] = &[
    (Volume::Loud, &["!", "!!", "!!!"]),
    (Volume::Soft, &["...", "...", "..."]),
];

/// Upper bound on repeated trailing punctuation written by `apply_tone`
const MAX_REPEAT: u32 = 3;

/// Perceived loudness of the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Volume {
    #[default]
    Normal,
    Loud,
    Soft,
}

impl Volume {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Loud => "loud",
            Self::Soft => "soft",
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Punctuation-derived emotional signal of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToneDescriptor {
    pub excitement: u32,
    pub questioning: u32,
    pub emphasis: u32,
    pub pauses: u32,
    pub volume: Volume,
}

impl ToneDescriptor {
    /// True when no marker was found
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

/// How overlapping marker variants are counted
///
/// With `Cumulative`, `"!!!"` contributes to the `!`, `!!` and `!!!` markers
/// at every position each occurs (3 + 2 + 1). With `LongestMatch`, each
/// punctuation run is split greedily into the longest markers and each piece
/// counts once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingPolicy {
    #[default]
    Cumulative,
    LongestMatch,
}

impl fmt::Display for CountingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cumulative => f.write_str("cumulative"),
            Self::LongestMatch => f.write_str("longest-match"),
        }
    }
}

impl FromStr for CountingPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cumulative" => Ok(Self::Cumulative),
            "longest-match" | "longest_match" | "longest" => Ok(Self::LongestMatch),
            _ => Err(anyhow!("Invalid counting policy: {}", s)),
        }
    }
}

/// Extracts a `ToneDescriptor` from text
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneAnalyzer {
    policy: CountingPolicy,
}

impl ToneAnalyzer {
    pub fn new(policy: CountingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CountingPolicy {
        self.policy
    }

    /// Analyze the punctuation of `text`
    pub fn analyze(&self, text: &str) -> ToneDescriptor {
        let count = |markers: &[&str]| match self.policy {
            CountingPolicy::Cumulative => markers
                .iter()
                .map(|marker| count_overlapping(text, marker))
                .sum::<u32>(),
            CountingPolicy::LongestMatch => count_longest_match(text, markers),
        };

        let mut volume = Volume::Normal;
        for (group, markers) in VOLUME_MARKERS {
            if markers.iter().any(|marker| text.contains(marker)) {
                volume = *group;
            }
        }

        ToneDescriptor {
            excitement: count(EXCITEMENT_MARKERS),
            questioning: count(QUESTIONING_MARKERS),
            emphasis: count(EMPHASIS_MARKERS),
            pauses: count(PAUSE_MARKERS),
            volume,
        }
    }
}

/// Analyze with the default (cumulative) counting policy
pub fn analyze_tone(text: &str) -> ToneDescriptor {
    ToneAnalyzer::default().analyze(text)
}

/// Re-encode `tone` onto `text`
///
/// Volume suffix, then excitement, then questioning; emphasis wraps the
/// whole accumulated string last.
pub fn apply_tone(text: &str, tone: &ToneDescriptor) -> String {
    let mut result = text.to_string();

    match tone.volume {
        Volume::Loud => result.push_str("!!!"),
        Volume::Soft => result.push_str("..."),
        Volume::Normal => {}
    }

    if tone.excitement > 0 {
        result.push_str(&"!".repeat(tone.excitement.min(MAX_REPEAT) as usize));
    }

    if tone.questioning > 0 {
        result.push_str(&"?".repeat(tone.questioning.min(MAX_REPEAT) as usize));
    }

    if tone.emphasis > 0 {
        result = format!("*{}*", result);
    }

    result
}

/// Occurrences of `marker` starting at every char boundary, overlaps included
fn count_overlapping(text: &str, marker: &str) -> u32 {
    if marker.is_empty() {
        return 0;
    }

    text.char_indices()
        .filter(|(i, _)| text[*i..].starts_with(marker))
        .count() as u32
}

/// Greedy left-to-right tokenization, longest marker first
fn count_longest_match(text: &str, markers: &[&str]) -> u32 {
    let mut ordered: Vec<&str> = markers.iter().copied().filter(|m| !m.is_empty()).collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));
    ordered.dedup();

    let mut count = 0;
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        match ordered.iter().find(|marker| rest.starts_with(**marker)) {
            Some(marker) => {
                count += 1;
                rest = &rest[marker.len()..];
            }
            None => rest = &rest[c.len_utf8()..],
        }
    }

    count
}
