/*!
 * Tests for error types and user-facing messages
 */

use accent_translator::accent_client::{user_message, GENERIC_FAILURE_MESSAGE};
use accent_translator::errors::{AppError, ProviderError, TranslationError};

/// Provider errors format their details
#[test]
fn test_providerError_display_shouldIncludeDetails() {
    let error = ProviderError::ApiError {
        status_code: 503,
        message: "down".to_string(),
    };
    assert_eq!(error.to_string(), "API responded with error: 503 - down");

    let error = ProviderError::ConnectionError("refused".to_string());
    assert_eq!(error.to_string(), "Connection error: refused");
}

/// Provider errors convert into translation errors
#[test]
fn test_translationError_fromProviderError_shouldWrap() {
    let error: TranslationError = ProviderError::ParseError("bad json".to_string()).into();

    assert!(matches!(error, TranslationError::Provider(ProviderError::ParseError(_))));
    assert!(!error.is_invalid_input());
    assert_eq!(error.to_string(), "Provider error: Failed to parse API response: bad json");
}

/// Application errors wrap io and anyhow errors
#[test]
fn test_appError_conversions_shouldMapToVariants() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    assert!(matches!(AppError::from(io_error), AppError::File(_)));

    let other = AppError::from(anyhow::anyhow!("boom"));
    assert_eq!(other.to_string(), "Unknown error: boom");

    let translation = AppError::from(TranslationError::InvalidInput("empty".to_string()));
    assert_eq!(translation.to_string(), "Translation error: Invalid input: empty");
}

/// Users see the input problem, or a generic failure otherwise
#[test]
fn test_userMessage_withErrorKinds_shouldHideProviderDetails() {
    let invalid = TranslationError::InvalidInput("text must not be empty".to_string());
    assert_eq!(user_message(&invalid), "Invalid input: text must not be empty");

    let provider: TranslationError = ProviderError::RequestFailed("timeout".to_string()).into();
    assert_eq!(user_message(&provider), GENERIC_FAILURE_MESSAGE);
    assert_eq!(GENERIC_FAILURE_MESSAGE, "Failed to translate accent. Please try again.");
}
