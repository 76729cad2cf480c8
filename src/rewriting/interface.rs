//! Rewrite interface for source text rules
//!
//! This module defines the `Rewrite` trait that every rule in the rewrite pipeline implements.
//! A rewrite is a pure function from the current document text to the next document text.
//!
//! Design principles:
//! - Rewrites are pure: same input always produces same output
//! - Rewrites operate on whole documents: &str -> String
//! - Rewrites have metadata: name and description for logging/debugging
//! - Rewrites are composable: the pipeline chains them in a fixed order

/// A rule that rewrites C source text
///
/// Rules are the building blocks of the rewrite pipeline. Each rule takes the whole text
/// produced by the previous rule and returns the text handed to the next one.
///
/// # Examples
///
/// ```ignore
/// struct Uppercase;
///
/// impl Rewrite for Uppercase {
///     fn name(&self) -> &str {
///         "uppercase"
///     }
///
///     fn description(&self) -> &str {
///         "Uppercases the document"
///     }
///
///     fn apply(&self, source: &str) -> String {
///         source.to_uppercase()
///     }
/// }
/// ```
pub trait Rewrite: Send + Sync {
    /// Returns the name of this rule
    ///
    /// Names should be lowercase with underscores (e.g., "join_line_continuations")
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule does
    fn description(&self) -> &str;

    /// Apply this rule to a whole document
    fn apply(&self, source: &str) -> String;
}
