/*!
 * Tests for speech planning and the console synthesizer
 */

use accent_translator::app_config::SpeechConfig;
use accent_translator::speech::{default_voices, ConsoleSynthesizer, Prosody, SpeechSynthesizer, Utterance, Voice};
use accent_translator::translation::{analyze_tone, TranslationPipeline};

use crate::common;

fn assert_close(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-5, "expected {}, got {}", expected, actual);
}

/// Neutral text keeps the baseline prosody
#[test]
fn test_prosody_withNeutralTone_shouldUseBaseline() {
    let prosody = Prosody::from_tone(&analyze_tone("Good morning"), &SpeechConfig::default());

    assert_close(prosody.rate, 1.0);
    assert_close(prosody.pitch, 1.0);
    assert_close(prosody.volume, 1.0);
}

/// Excitement speeds up, loudness raises the volume
#[test]
fn test_prosody_withExcitedLoudTone_shouldRaiseRateAndVolume() {
    let prosody = Prosody::from_tone(&analyze_tone("Brilliant!"), &SpeechConfig::default());

    assert_close(prosody.rate, 1.2);
    assert_close(prosody.pitch, 1.0);
    assert_close(prosody.volume, 1.2);
}

/// Questions raise the pitch, ellipses lower the volume
#[test]
fn test_prosody_withSoftQuestion_shouldRaisePitchAndLowerVolume() {
    let prosody = Prosody::from_tone(&analyze_tone("Are you sure...?"), &SpeechConfig::default());

    assert_close(prosody.rate, 1.0);
    assert_close(prosody.pitch, 1.2);
    assert_close(prosody.volume, 0.8);
}

/// The utterance uses the first voice matching the accent
#[test]
fn test_plan_withMatchingVoice_shouldSelectIt() {
    let result = TranslationPipeline::default()
        .translate("Take the elevator!", "American", "British")
        .unwrap();
    let utterance = Utterance::plan(&result, &common::test_voices(), &SpeechConfig::default());

    assert_eq!(utterance.text, "Take the lift!!!!!");
    assert_eq!(utterance.lang, "en-GB");
    assert_eq!(utterance.voice.unwrap().name, "Google UK English Female");
}

/// Without a matching voice the synthesizer default is used
#[test]
fn test_plan_withoutMatchingVoice_shouldLeaveVoiceUnset() {
    let result = TranslationPipeline::default()
        .translate("hello", "American", "Indian")
        .unwrap();
    let utterance = Utterance::plan(&result, &common::test_voices(), &SpeechConfig::default());

    assert_eq!(utterance.text, "namaste");
    assert_eq!(utterance.lang, "en-IN");
    assert!(utterance.voice.is_none());
}

/// An accent without a voice language speaks the fallback language
#[test]
fn test_plan_withEmptyVoiceLang_shouldUseFallback() {
    let mut result = TranslationPipeline::default()
        .translate("hello", "American", "German")
        .unwrap();
    result.voice_info.voice_lang.clear();
    result.voice_info.voice_uri.clear();

    let utterance = Utterance::plan(&result, &[], &SpeechConfig::default());
    assert_eq!(utterance.lang, "en-US");
}

/// The console synthesizer writes one line per utterance
#[test]
fn test_consoleSynthesizer_speak_shouldRenderUtterance() {
    let result = TranslationPipeline::default()
        .translate("My mom!", "American", "British")
        .unwrap();

    let mut synthesizer = ConsoleSynthesizer::new(Vec::new());
    let utterance = Utterance::plan(&result, &synthesizer.voices(), &SpeechConfig::default());
    synthesizer.speak(&utterance).unwrap();

    assert!(!synthesizer.is_speaking());
    assert_eq!(synthesizer.last_spoken().unwrap().text, "My mum!!!!!");
    let output = String::from_utf8(synthesizer.into_inner()).unwrap();
    assert_eq!(
        output,
        "[speak lang=en-GB voice=\"Google UK English Female\" rate=1.2 pitch=1.0 volume=1.2] My mum!!!!!\n"
    );
}

/// Speaking again replaces the last utterance
#[test]
fn test_consoleSynthesizer_speakTwice_shouldReplaceLastSpoken() {
    let voices = vec![Voice::new("Only Voice", "en-US")];
    let mut synthesizer = ConsoleSynthesizer::new(Vec::new()).with_voices(voices);
    let pipeline = TranslationPipeline::default();
    let settings = SpeechConfig::default();

    let first = Utterance::plan(&pipeline.translate("one", "American", "American").unwrap(), &synthesizer.voices(), &settings);
    let second = Utterance::plan(&pipeline.translate("two", "American", "American").unwrap(), &synthesizer.voices(), &settings);

    synthesizer.speak(&first).unwrap();
    synthesizer.speak(&second).unwrap();
    assert_eq!(synthesizer.last_spoken().unwrap().text, "two");

    synthesizer.cancel();
    assert!(!synthesizer.is_speaking());
    assert_eq!(synthesizer.last_spoken().unwrap().text, "two");

    let output = String::from_utf8(synthesizer.into_inner()).unwrap();
    assert_eq!(output.lines().count(), 2);
    assert!(output.contains("voice=\"Only Voice\""));
}

struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A failed render reports the error and stops speaking
#[test]
fn test_consoleSynthesizer_withFailingWriter_shouldNotStaySpeaking() {
    let result = TranslationPipeline::default()
        .translate("hello", "American", "British")
        .unwrap();
    let mut synthesizer = ConsoleSynthesizer::new(BrokenPipe);
    let utterance = Utterance::plan(&result, &synthesizer.voices(), &SpeechConfig::default());

    assert!(synthesizer.speak(&utterance).is_err());
    assert!(!synthesizer.is_speaking());
    assert!(synthesizer.last_spoken().is_none());
}

/// The default voice set includes a British voice
#[test]
fn test_defaultVoices_shouldIncludeBrowserVoices() {
    let voices = default_voices();
    assert_eq!(voices.len(), 7);
    assert!(voices.iter().any(|voice| voice.lang == "en-GB"));
}
