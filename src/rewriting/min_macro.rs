//! `MIN(a, b)` expansion
//!
//! The compiler has no macro system, so each `MIN` call is expanded in place to the ternary
//! the header macro would produce. Arguments are the two top-level comma-separated pieces of
//! the call; they are rewritten recursively, so `MIN(MIN(a, b), c)` expands fully.
//!
//! A call with any other number of top-level arguments (including a raw comma expression such
//! as `MIN(a, b, c)`) or with no closing parenthesis before the end of its statement is left
//! as written for the compiler to reject.

use crate::rewriting::arguments::scan_arguments;
use crate::rewriting::Rewrite;
use once_cell::sync::Lazy;
use regex::Regex;

static MIN_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bMIN\(").unwrap());

/// Expands `MIN(a, b)` to `((a)<(b)?(a):(b))`
pub struct ExpandMin;

impl Rewrite for ExpandMin {
    fn name(&self) -> &str {
        "expand_min"
    }

    fn description(&self) -> &str {
        "Expand MIN(a, b) calls into an inline conditional expression"
    }

    fn apply(&self, source: &str) -> String {
        expand_min(source)
    }
}

/// Expand every two-argument `MIN` call
pub fn expand_min(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut cursor = 0;

    while let Some(found) = MIN_CALL.find_at(source, cursor) {
        let call = scan_arguments(source, found.end());
        match call.as_ref().and_then(|c| c.exactly(2).map(|args| (c.end(), args))) {
            Some((end, args)) => {
                result.push_str(&source[cursor..found.start()]);
                let a = expand_min(args[0]);
                let b = expand_min(args[1]);
                result.push_str(&format!("(({a})<({b})?({a}):({b}))"));
                cursor = end;
            }
            None => {
                result.push_str(&source[cursor..found.end()]);
                cursor = found.end();
            }
        }
    }

    result.push_str(&source[cursor..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_min() {
        assert_eq!(
            expand_min("int x = MIN(a, b);"),
            "int x = ((a)<(b)?(a):(b));"
        );
    }

    #[test]
    fn test_min_with_calls_and_arithmetic() {
        assert_eq!(
            expand_min("n = MIN(strlen(p), len - 1);"),
            "n = ((strlen(p))<(len - 1)?(strlen(p)):(len - 1));"
        );
    }

    #[test]
    fn test_nested_min() {
        assert_eq!(
            expand_min("MIN(MIN(a, b), c)"),
            "((((a)<(b)?(a):(b)))<(c)?(((a)<(b)?(a):(b))):(c))"
        );
    }

    #[test]
    fn test_two_calls_on_one_line() {
        assert_eq!(
            expand_min("f(MIN(a,b), MIN(c,d));"),
            "f(((a)<(b)?(a):(b)), ((c)<(d)?(c):(d)));"
        );
    }

    #[test]
    fn test_wrong_arity_untouched() {
        for source in ["MIN(a)", "MIN(a, b, c)", "MIN()"] {
            assert_eq!(expand_min(source), source);
        }
    }

    #[test]
    fn test_unclosed_call_untouched() {
        assert_eq!(expand_min("MIN(a, b"), "MIN(a, b");
    }

    #[test]
    fn test_unclosed_call_stops_at_statement_end() {
        assert_eq!(
            expand_min("x = MIN(a, b;\ny = MIN(c, d);\n"),
            "x = MIN(a, b;\ny = ((c)<(d)?(c):(d));\n"
        );
    }

    #[test]
    fn test_whole_word_only() {
        let source = "int x = XMIN(a, b) + MIN_VALUE + min(a, b);";
        assert_eq!(expand_min(source), source);
    }

    #[test]
    fn test_call_after_untouched_call() {
        assert_eq!(
            expand_min("MIN(a) + MIN(b, c)"),
            "MIN(a) + ((b)<(c)?(b):(c))"
        );
    }
}
