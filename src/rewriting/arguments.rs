//! Argument scanning for macro-like calls
//!
//! `MIN(...)` and `va_start(...)` are found with a regex that stops at the opening
//! parenthesis. This module walks from there to the matching close parenthesis and splits
//! the argument list at commas that sit at nesting depth zero.
//!
//! Nesting counts `()`, `[]` and `{}`. String and character literals are skipped whole, so a
//! comma or parenthesis inside `"a,b"` or `')'` never splits or closes anything. All the
//! delimiters are ASCII, so every index produced is a char boundary.
//!
//! A `;` at depth zero ends the statement, so a list still open there is treated as never
//! closed and the scan stops instead of running to the end of the file.

use std::ops::Range;

/// Arguments of one call, as slices of the scanned source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArguments<'a> {
    /// Raw argument text, untrimmed, in order
    pub arguments: Vec<&'a str>,
    /// Byte range from the first argument byte up to and including the closing `)`
    pub span: Range<usize>,
}

impl<'a> CallArguments<'a> {
    /// Byte offset just past the closing parenthesis
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// The arguments trimmed of surrounding whitespace, if there are exactly `n` of them
    pub fn exactly(&self, n: usize) -> Option<Vec<&'a str>> {
        if self.arguments.len() == n {
            Some(self.arguments.iter().map(|a| a.trim()).collect())
        } else {
            None
        }
    }
}

/// Scan the argument list starting at `start`, the byte right after an opening `(`.
///
/// Returns `None` when the list is never closed, or when a `;` at depth zero comes first.
pub fn scan_arguments(source: &str, start: usize) -> Option<CallArguments<'_>> {
    let bytes = source.as_bytes();
    let mut arguments = Vec::new();
    let mut depth = 0usize;
    let mut arg_start = start;
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' if depth == 0 => {
                arguments.push(&source[arg_start..i]);
                return Some(CallArguments {
                    arguments,
                    span: start..i + 1,
                });
            }
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b';' if depth == 0 => return None,
            b',' if depth == 0 => {
                arguments.push(&source[arg_start..i]);
                arg_start = i + 1;
            }
            quote @ (b'"' | b'\'') => {
                i = skip_literal(bytes, i, quote);
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Index just past the literal opened at `open`; the end of input if it never closes
fn skip_literal(bytes: &[u8], open: usize, quote: u8) -> usize {
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}
