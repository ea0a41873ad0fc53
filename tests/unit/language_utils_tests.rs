/*!
 * Tests for voice language tag utilities
 */

use accent_translator::language_utils::{
    get_language_name, normalize_voice_lang, parse_voice_lang, voice_langs_match,
};

/// Tags split into language and region
#[test]
fn test_parseVoiceLang_withValidTags_shouldParse() {
    let lang = parse_voice_lang("en-GB").unwrap();
    assert_eq!(lang.language, "en");
    assert_eq!(lang.region.as_deref(), Some("GB"));

    let lang = parse_voice_lang("FR").unwrap();
    assert_eq!(lang.language, "fr");
    assert_eq!(lang.region, None);
}

/// Unknown languages and malformed regions are rejected
#[test]
fn test_parseVoiceLang_withInvalidTags_shouldFail() {
    assert!(parse_voice_lang("").is_err());
    assert!(parse_voice_lang("xx-GB").is_err());
    assert!(parse_voice_lang("eng-GB").is_err());
    assert!(parse_voice_lang("en-GBR").is_err());
    assert!(parse_voice_lang("en-GB-oxendict").is_err());
}

/// Case and separators are normalized
#[test]
fn test_normalizeVoiceLang_shouldCanonicalize() {
    assert_eq!(normalize_voice_lang("en_gb"), "en-GB");
    assert_eq!(normalize_voice_lang(" HI-in "), "hi-IN");
    assert_eq!(normalize_voice_lang("custom"), "custom");
}

/// Matching compares normalized tags
#[test]
fn test_voiceLangsMatch_shouldCompareNormalizedTags() {
    assert!(voice_langs_match("en-GB", "en_gb"));
    assert!(!voice_langs_match("en-GB", "en-US"));
    assert!(!voice_langs_match("en", "en-US"));
    assert!(!voice_langs_match("", ""));
}

/// Language names come from the ISO 639 tables
#[test]
fn test_getLanguageName_shouldReturnEnglishName() {
    assert_eq!(get_language_name("fr-FR").unwrap(), "French");
    assert_eq!(get_language_name("de-DE").unwrap(), "German");
    assert!(get_language_name("zz").is_err());
}
