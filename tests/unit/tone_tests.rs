/*!
 * Tests for tone analysis and tone application
 */

use accent_translator::translation::{
    analyze_tone, apply_tone, CountingPolicy, ToneAnalyzer, ToneDescriptor, Volume,
};

/// Text without any marker is neutral
#[test]
fn test_analyze_withPlainText_shouldBeNeutral() {
    let tone = analyze_tone("Good morning mate");

    assert!(tone.is_neutral());
    assert_eq!(tone, ToneDescriptor::default());
    assert_eq!(tone.volume, Volume::Normal);
}

/// Overlapping markers all contribute with the cumulative policy
#[test]
fn test_analyze_withTripleExclamation_shouldCountCumulatively() {
    let tone = ToneAnalyzer::new(CountingPolicy::Cumulative).analyze("Hi!!!");

    assert_eq!(tone.excitement, 6);
    assert_eq!(tone.questioning, 0);
    assert_eq!(tone.volume, Volume::Loud);
}

/// A punctuation run counts once with the longest-match policy
#[test]
fn test_analyze_withTripleExclamation_shouldCountLongestMatchOnce() {
    let tone = ToneAnalyzer::new(CountingPolicy::LongestMatch).analyze("Hi!!!");

    assert_eq!(tone.excitement, 1);
    assert_eq!(tone.volume, Volume::Loud);
}

/// Longer runs split into the longest markers first
#[test]
fn test_analyze_withLongRun_shouldSplitGreedily() {
    let analyzer = ToneAnalyzer::new(CountingPolicy::LongestMatch);

    assert_eq!(analyzer.analyze("What?????").questioning, 2);
    assert_eq!(analyzer.analyze("What? Really?").questioning, 2);
}

/// Ellipses count as pauses and set the volume to soft
#[test]
fn test_analyze_withEllipsis_shouldBeSoftWithPauses() {
    let cumulative = analyze_tone("Wait...");
    assert_eq!(cumulative.pauses, 4);
    assert_eq!(cumulative.volume, Volume::Soft);

    let longest = ToneAnalyzer::new(CountingPolicy::LongestMatch).analyze("Wait...");
    assert_eq!(longest.pauses, 1);
    assert_eq!(longest.volume, Volume::Soft);
}

/// Soft markers are checked after loud ones and win
#[test]
fn test_analyze_withLoudAndSoftMarkers_shouldPreferSoft() {
    let tone = analyze_tone("Stop! Now...");
    assert_eq!(tone.volume, Volume::Soft);
    assert_eq!(tone.excitement, 1);
}

/// Emphasis and separators are counted
#[test]
fn test_analyze_withEmphasisAndSeparators_shouldCountEach() {
    let tone = analyze_tone("*bold* a, b; c");
    assert_eq!(tone.emphasis, 2);
    assert_eq!(tone.pauses, 2);
    assert_eq!(tone.volume, Volume::Normal);
}

/// Policies parse from their config spellings
#[test]
fn test_countingPolicy_fromStr_shouldAcceptKnownSpellings() {
    assert_eq!("cumulative".parse::<CountingPolicy>().unwrap(), CountingPolicy::Cumulative);
    assert_eq!("longest-match".parse::<CountingPolicy>().unwrap(), CountingPolicy::LongestMatch);
    assert_eq!("Longest_Match".parse::<CountingPolicy>().unwrap(), CountingPolicy::LongestMatch);
    assert!("sometimes".parse::<CountingPolicy>().is_err());
    assert_eq!(CountingPolicy::LongestMatch.to_string(), "longest-match");
}

/// Volume, excitement and emphasis are applied in order
#[test]
fn test_applyTone_withLoudExcitedEmphasis_shouldWrapSuffixes() {
    let tone = ToneDescriptor {
        excitement: 1,
        questioning: 0,
        emphasis: 1,
        pauses: 0,
        volume: Volume::Loud,
    };

    assert_eq!(apply_tone("hello", &tone), "*hello!!!!*");
}

/// Repeated suffixes are capped at three
#[test]
fn test_applyTone_withLargeCounts_shouldCapRepeats() {
    let tone = ToneDescriptor {
        excitement: 6,
        questioning: 9,
        ..ToneDescriptor::default()
    };

    assert_eq!(apply_tone("why", &tone), "why!!!???");
}

/// Soft volume appends an ellipsis; pauses add nothing
#[test]
fn test_applyTone_withSoftVolumeAndPauses_shouldOnlyAppendEllipsis() {
    let tone = ToneDescriptor {
        pauses: 4,
        volume: Volume::Soft,
        ..ToneDescriptor::default()
    };

    assert_eq!(apply_tone("well", &tone), "well...");
    assert_eq!(apply_tone("well", &ToneDescriptor::default()), "well");
}

/// Tone serializes with lowercase volume names
#[test]
fn test_toneDescriptor_serialize_shouldUseLowercaseVolume() {
    let tone = analyze_tone("Hey!");
    let json = serde_json::to_value(tone).unwrap();

    assert_eq!(json["volume"], "loud");
    assert_eq!(json["excitement"], 1);
}
