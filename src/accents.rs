/*!
 * Accent lexicon.
 *
 * The fixed table of supported accents. Each entry carries the voice
 * descriptor handed to speech synthesis and the ordered substitution rules
 * the rewriter applies when the accent is a translation target.
 */

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Id of the accent used when a target accent is unknown
pub const DEFAULT_ACCENT_ID: &str = "American";

/// Voice information for an accent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentDescriptor {
    /// Accent identifier, e.g. "British"
    pub id: String,

    /// Human readable name
    #[serde(rename = "displayName")]
    pub display_name: String,

    /// Preferred synthesis voice name
    #[serde(rename = "voiceURI")]
    pub voice_uri: String,

    /// BCP-47 language tag for synthesis, e.g. "en-GB"
    #[serde(rename = "voiceLang")]
    pub voice_lang: String,
}

impl AccentDescriptor {
    fn new(id: &str, display_name: &str, voice_uri: &str, voice_lang: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            voice_uri: voice_uri.to_string(),
            voice_lang: voice_lang.to_string(),
        }
    }
}

/// A lexicon entry: voice descriptor plus declared substitution pairs
#[derive(Debug)]
pub struct AccentEntry {
    pub descriptor: AccentDescriptor,

    /// (phrase, replacement) pairs in application order; empty means passthrough
    pub substitutions: &'static [(&'static str, &'static str)],
}

/// Accent list payload as served by the accents endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccentCatalog {
    /// Accent ids in display order
    pub accents: Vec<String>,

    /// Descriptor for each id
    #[serde(rename = "accentData")]
    pub accent_data: HashMap<String, AccentDescriptor>,
}

impl AccentCatalog {
    /// Descriptor for an id in this catalog
    pub fn get(&self, id: &str) -> Option<&AccentDescriptor> {
        self.accent_data.get(id)
    }

    /// Descriptors in the catalog's declared order, skipping ids without data
    pub fn descriptors(&self) -> Vec<&AccentDescriptor> {
        self.accents
            .iter()
            .filter_map(|id| self.accent_data.get(id))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.accents.is_empty()
    }
}

const BRITISH_RULES: &[(&str, &str)] = &[
    ("mom", "mum"),
    ("apartment", "flat"),
    ("elevator", "lift"),
    ("truck", "lorry"),
    ("trash", "rubbish"),
    ("soccer", "football"),
    ("vacation", "holiday"),
    ("fall", "autumn"),
    ("cookie", "biscuit"),
];

const AUSTRALIAN_RULES: &[(&str, &str)] = &[
    ("friend", "mate"),
    ("this afternoon", "this arvo"),
    ("breakfast", "brekkie"),
    ("definitely", "defo"),
    ("thank you", "ta"),
    ("good", "bonza"),
];

// "right" runs after the two phrase rules that also contain it
const INDIAN_RULES: &[(&str, &str)] = &[
    ("isn't it", "na?"),
    ("isn't that right", "na?"),
    ("right", "na?"),
    ("yes", "haan"),
    ("food", "khana"),
    ("hello", "namaste"),
];

static ACCENT_TABLE: Lazy<Vec<AccentEntry>> = Lazy::new(|| {
    vec![
        AccentEntry {
            descriptor: AccentDescriptor::new("American", "American English", "Google US English", "en-US"),
            substitutions: &[],
        },
        AccentEntry {
            descriptor: AccentDescriptor::new("British", "British English", "Google UK English Female", "en-GB"),
            substitutions: BRITISH_RULES,
        },
        AccentEntry {
            // Few platforms ship an Australian voice, so the UK voice is preferred
            descriptor: AccentDescriptor::new("Australian", "Australian English", "Google UK English Female", "en-AU"),
            substitutions: AUSTRALIAN_RULES,
        },
        AccentEntry {
            descriptor: AccentDescriptor::new("Indian", "Indian English", "Hindi India", "en-IN"),
            substitutions: INDIAN_RULES,
        },
        AccentEntry {
            descriptor: AccentDescriptor::new("Spanish", "Spanish", "Google español", "es-ES"),
            substitutions: &[],
        },
        AccentEntry {
            descriptor: AccentDescriptor::new("French", "French", "Google français", "fr-FR"),
            substitutions: &[],
        },
        AccentEntry {
            descriptor: AccentDescriptor::new("German", "German", "Google Deutsch", "de-DE"),
            substitutions: &[],
        },
    ]
});

/// All lexicon entries in declaration order
pub fn entries() -> &'static [AccentEntry] {
    &ACCENT_TABLE
}

/// Look up the descriptor for an accent id (exact, case-sensitive)
pub fn lookup(accent_id: &str) -> Option<&'static AccentDescriptor> {
    ACCENT_TABLE
        .iter()
        .find(|entry| entry.descriptor.id == accent_id)
        .map(|entry| &entry.descriptor)
}

/// Look up the descriptor, falling back to the default accent
pub fn lookup_or_default(accent_id: &str) -> &'static AccentDescriptor {
    lookup(accent_id).unwrap_or_else(default_accent)
}

/// The descriptor used for unknown targets
pub fn default_accent() -> &'static AccentDescriptor {
    &ACCENT_TABLE[0].descriptor
}

/// Accent ids in declaration order
pub fn list_accents() -> Vec<&'static str> {
    ACCENT_TABLE
        .iter()
        .map(|entry| entry.descriptor.id.as_str())
        .collect()
}

/// Descriptors in declaration order
pub fn descriptors() -> Vec<&'static AccentDescriptor> {
    ACCENT_TABLE.iter().map(|entry| &entry.descriptor).collect()
}

/// Declared substitution pairs for an accent, `None` when the accent has none
pub fn substitutions(accent_id: &str) -> Option<&'static [(&'static str, &'static str)]> {
    ACCENT_TABLE
        .iter()
        .find(|entry| entry.descriptor.id == accent_id)
        .map(|entry| entry.substitutions)
        .filter(|rules| !rules.is_empty())
}

/// The static table as an accent list payload
pub fn catalog() -> AccentCatalog {
    AccentCatalog {
        accents: list_accents().into_iter().map(str::to_string).collect(),
        accent_data: ACCENT_TABLE
            .iter()
            .map(|entry| (entry.descriptor.id.clone(), entry.descriptor.clone()))
            .collect(),
    }
}
