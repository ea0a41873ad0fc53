/*!
 * # Accent Translator
 *
 * A Rust library that rewrites text into a target English accent and
 * carries the tone of the original over to the result and to speech
 * synthesis.
 *
 * ## Features
 *
 * - Dictionary-based accent substitution (British, Australian, Indian)
 * - Punctuation-derived tone analysis and re-application
 * - Voice descriptors for seven accents and languages
 * - Local pipeline or remote translation service with fallback
 * - Tone-aware speech prosody
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `accents`: The fixed accent lexicon
 * - `translation`: The translation pipeline:
 *   - `translation::tone`: Tone analysis and application
 *   - `translation::rewriter`: Accent substitution rules
 *   - `translation::pipeline`: Orchestration and result types
 * - `providers`: Local, remote and mock translation backends
 * - `accent_client`: Client facade with the boundary error policy
 * - `speech`: Voice selection, prosody and synthesizer trait
 * - `session`: Presentation state
 * - `app_controller`: Main application controller
 * - `app_config`: Configuration management
 * - `language_utils`: Voice language tag utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod accent_client;
pub mod accents;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod session;
pub mod speech;
pub mod translation;

// Re-export main types for easier usage
pub use accent_client::AccentClient;
pub use accents::{AccentCatalog, AccentDescriptor};
pub use app_config::Config;
pub use errors::{AppError, ProviderError, TranslationError};
pub use providers::TranslationReply;
pub use translation::{TranslationPipeline, TranslationRequest, TranslationResult};
