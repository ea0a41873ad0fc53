/*!
 * Accent translation core.
 *
 * This module contains the deterministic translation pipeline. It is split
 * into several submodules:
 *
 * - `tone`: Tone analysis and tone application
 * - `rewriter`: Accent-specific phrase substitution
 * - `pipeline`: Orchestration of the above into a `TranslationResult`
 */

// Re-export main types for easier usage
pub use self::pipeline::{TranslationPipeline, TranslationRequest, TranslationResult};
pub use self::rewriter::{rewrite, AccentRewriter, SubstitutionRule};
pub use self::tone::{analyze_tone, apply_tone, CountingPolicy, ToneAnalyzer, ToneDescriptor, Volume};

// Submodules
pub mod pipeline;
pub mod rewriter;
pub mod tone;
