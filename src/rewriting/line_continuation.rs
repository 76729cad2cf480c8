//! Line continuation joining
//!
//! A backslash right before a newline splices the next physical line onto the current one.
//! This runs first so the directive rule sees a multi-line `#define` as one line and blanks
//! all of it.

use crate::rewriting::Rewrite;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static CONTINUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\r?\n").unwrap());

/// Deletes every backslash-newline pair
pub struct JoinLineContinuations;

impl Rewrite for JoinLineContinuations {
    fn name(&self) -> &str {
        "join_line_continuations"
    }

    fn description(&self) -> &str {
        "Delete backslash-newline pairs, splicing continued lines together"
    }

    fn apply(&self, source: &str) -> String {
        join_line_continuations(source)
    }
}

/// Remove each `\` + newline (LF or CRLF) from the source
pub fn join_line_continuations(source: &str) -> String {
    CONTINUATION.replace_all(source, NoExpand("")).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_macro_body() {
        let source = "#define unreachable() \\\n  error(\"internal error\")\nint x;\n";
        assert_eq!(
            join_line_continuations(source),
            "#define unreachable()   error(\"internal error\")\nint x;\n"
        );
    }

    #[test]
    fn test_joins_every_continuation() {
        assert_eq!(join_line_continuations("a\\\nb\\\nc\n"), "abc\n");
    }

    #[test]
    fn test_crlf_continuation() {
        assert_eq!(join_line_continuations("a\\\r\nb"), "ab");
    }

    #[test]
    fn test_backslash_not_before_newline_is_kept() {
        let source = "char *s = \"a\\n\";\nchar c = '\\\\';\n";
        assert_eq!(join_line_continuations(source), source);
    }

    #[test]
    fn test_backslash_space_newline_is_kept() {
        assert_eq!(join_line_continuations("a\\ \nb"), "a\\ \nb");
    }
}
