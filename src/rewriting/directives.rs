//! Directive line blanking
//!
//! The target compiler has no preprocessor. Any line whose first non-blank character is `#`
//! (spaces, tabs, form feeds or any other non-newline whitespace may precede it)
//! is emptied; its newline stays, so line numbers in later diagnostics still match the input.
//! Nothing is expanded and conditional blocks are not evaluated: both branches of an
//! `#ifdef` survive.

use crate::rewriting::Rewrite;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static DIRECTIVE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[^\S\r\n]*#.*$").unwrap());

/// Replaces directive lines with empty lines
pub struct BlankDirectives;

impl Rewrite for BlankDirectives {
    fn name(&self) -> &str {
        "blank_directives"
    }

    fn description(&self) -> &str {
        "Empty every line whose first non-whitespace character is '#'"
    }

    fn apply(&self, source: &str) -> String {
        blank_directives(source)
    }
}

/// Empty every directive line, keeping line terminators
pub fn blank_directives(source: &str) -> String {
    DIRECTIVE_LINE.replace_all(source, NoExpand("")).into_owned()
}
