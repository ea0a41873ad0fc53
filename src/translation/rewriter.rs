/*!
 * Accent rewriting.
 *
 * Applies an accent's ordered substitution rules to text. Each rule is a
 * case-insensitive literal phrase; matching is substring level, so "fall"
 * also matches inside "falling". Every rule scans the output of the rules
 * before it, and the replacement is inserted verbatim without preserving
 * the case of the matched text.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};
use std::collections::HashMap;

use crate::accents;

/// A compiled phrase → replacement rule
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    phrase: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl SubstitutionRule {
    /// Compile a literal phrase into an ASCII case-insensitive matcher
    ///
    /// Only ASCII letters fold, so `ſ` does not match `s` and the Kelvin
    /// sign does not match `k`.
    pub fn new(phrase: &'static str, replacement: &'static str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&regex::escape(phrase))
            .case_insensitive(true)
            .unicode(false)
            .build()?;

        Ok(Self { phrase, pattern, replacement })
    }

    /// The literal phrase this rule matches
    pub fn phrase(&self) -> &str {
        self.phrase
    }

    pub fn replacement(&self) -> &str {
        self.replacement
    }

    /// Replace every non-overlapping occurrence in `text`
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, NoExpand(self.replacement)).into_owned()
    }
}

/// Compiled rule sets keyed by accent id, built from the lexicon once
static RULE_SETS: Lazy<HashMap<&'static str, Vec<SubstitutionRule>>> = Lazy::new(|| {
    accents::entries()
        .iter()
        .filter(|entry| !entry.substitutions.is_empty())
        .map(|entry| {
            let rules = entry
                .substitutions
                .iter()
                .filter_map(|&(phrase, replacement)| match SubstitutionRule::new(phrase, replacement) {
                    Ok(rule) => Some(rule),
                    Err(e) => {
                        warn!("Skipping substitution '{}' for {}: {}", phrase, entry.descriptor.id, e);
                        None
                    }
                })
                .collect();
            (entry.descriptor.id.as_str(), rules)
        })
        .collect()
});

/// Rewrites text for a target accent
#[derive(Debug, Clone, Copy, Default)]
pub struct AccentRewriter;

impl AccentRewriter {
    pub fn new() -> Self {
        Self
    }

    /// Compiled rules for an accent, `None` when it declares none
    pub fn rules_for(&self, accent_id: &str) -> Option<&'static [SubstitutionRule]> {
        RULE_SETS.get(accent_id).map(|rules| rules.as_slice())
    }

    /// Apply the target accent's rules in declared order
    pub fn rewrite(&self, text: &str, target_accent_id: &str) -> String {
        let Some(rules) = self.rules_for(target_accent_id) else {
            debug!("No substitution rules for '{}', passing text through", target_accent_id);
            return text.to_string();
        };

        rules
            .iter()
            .fold(text.to_string(), |current, rule| rule.apply(&current))
    }
}

/// Rewrite `text` for `target_accent_id`
pub fn rewrite(text: &str, target_accent_id: &str) -> String {
    AccentRewriter::new().rewrite(text, target_accent_id)
}
