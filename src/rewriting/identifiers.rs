//! Whole-word identifier substitutions
//!
//! Keywords, literals and helper macros the target compiler lacks are replaced by spellings it
//! understands. Every pattern is anchored on word boundaries, so `mybool`, `nullable` or
//! `true_count` are left alone. Substitution is purely textual: occurrences inside string
//! literals and comments are rewritten too.

use crate::rewriting::Rewrite;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// (pattern, replacement) pairs, applied in this order
const SUBSTITUTIONS: &[(&str, &str)] = &[
    (r"\bbool\b", "_Bool"),
    (r"\berrno\b", "*__errno_location()"),
    (r"\btrue\b", "1"),
    (r"\bfalse\b", "0"),
    (r"\bNULL\b", "0"),
    (r"\bunreachable\(\)", "error(\"unreachable\")"),
];

static COMPILED: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SUBSTITUTIONS
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
});

/// Rewrites `bool`, `errno`, `true`, `false`, `NULL` and `unreachable()`
pub struct SubstituteIdentifiers;

impl Rewrite for SubstituteIdentifiers {
    fn name(&self) -> &str {
        "substitute_identifiers"
    }

    fn description(&self) -> &str {
        "Replace bool/errno/true/false/NULL/unreachable() with forms the compiler accepts"
    }

    fn apply(&self, source: &str) -> String {
        substitute_identifiers(source)
    }
}

/// Apply every whole-word substitution in order
pub fn substitute_identifiers(source: &str) -> String {
    COMPILED
        .iter()
        .fold(source.to_string(), |text, (regex, replacement)| {
            regex.replace_all(&text, NoExpand(*replacement)).into_owned()
        })
}
