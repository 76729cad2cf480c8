//! Adjacent string literal merging
//!
//! C concatenates `"abc" "def"` at translation time; the target compiler does not. The only
//! layout the compiler's sources use is one literal per line, so a closing quote at the end of
//! a line followed (after any whitespace, including blank lines) by an opening quote is
//! collapsed into a single literal.
//!
//! Matches never overlap, and each one consumes only the closing quote of one literal and the
//! opening quote of the next, so a whole column of literals merges in the single pass.
//! Literals sharing a line (`"a" "b"`) are not merged.

use crate::rewriting::Rewrite;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static ADJACENT_LITERALS: Lazy<Regex> = Lazy::new(|| Regex::new(r#""\n\s*""#).unwrap());

/// Joins string literals split across lines
pub struct MergeStringLiterals;

impl Rewrite for MergeStringLiterals {
    fn name(&self) -> &str {
        "merge_string_literals"
    }

    fn description(&self) -> &str {
        "Join a string literal ending a line with the literal opening the next non-blank line"
    }

    fn apply(&self, source: &str) -> String {
        merge_string_literals(source)
    }
}

/// Delete `"` newline whitespace `"` sequences
pub fn merge_string_literals(source: &str) -> String {
    ADJACENT_LITERALS
        .replace_all(source, NoExpand(""))
        .into_owned()
}
