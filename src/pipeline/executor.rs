//! Ordered rule execution
//!
//! A `RewritePipeline` owns its rules and applies them left to right, each one receiving the
//! text the previous rule produced. The standard order is built once into [`STANDARD`].

use crate::rewriting::{
    BlankDirectives, ExpandMin, JoinLineContinuations, LowerVaStart, MergeStringLiterals,
    Rewrite, SubstituteIdentifiers,
};
use log::trace;
use once_cell::sync::Lazy;

/// The standard rule order, shared by the CLI and library callers
pub static STANDARD: Lazy<RewritePipeline> = Lazy::new(RewritePipeline::standard);

/// An ordered list of rewrite rules
pub struct RewritePipeline {
    rules: Vec<Box<dyn Rewrite>>,
}

impl RewritePipeline {
    /// Create an empty pipeline; running it returns the input unchanged
    pub fn new() -> Self {
        RewritePipeline { rules: Vec::new() }
    }

    /// Create the pipeline with every rule in its required order
    pub fn standard() -> Self {
        Self::new()
            .with(JoinLineContinuations)
            .with(BlankDirectives)
            .with(MergeStringLiterals)
            .with(SubstituteIdentifiers)
            .with(ExpandMin)
            .with(LowerVaStart)
    }

    /// Append a rule, returning the extended pipeline
    pub fn with<R>(mut self, rule: R) -> Self
    where
        R: Rewrite + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Rule names in application order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Iterate over the rules in application order
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rewrite> + '_ {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Run every rule over `source`
    pub fn run(&self, source: &str) -> String {
        self.run_rules(source, self.rules.len())
    }

    /// Run rules up to and including the one called `name`
    ///
    /// Useful to inspect intermediate text. Returns `None` for an unknown rule name.
    pub fn run_until(&self, source: &str, name: &str) -> Option<String> {
        let index = self.rules.iter().position(|rule| rule.name() == name)?;
        Some(self.run_rules(source, index + 1))
    }

    fn run_rules(&self, source: &str, count: usize) -> String {
        let mut text = source.to_string();
        for rule in self.rules.iter().take(count) {
            let next = rule.apply(&text);
            trace!(
                "{}: {} -> {} bytes{}",
                rule.name(),
                text.len(),
                next.len(),
                if next == text { " (unchanged)" } else { "" }
            );
            text = next;
        }
        text
    }
}

impl Default for RewritePipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite `source` with the standard pipeline
pub fn rewrite(source: &str) -> String {
    STANDARD.run(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shout;

    impl Rewrite for Shout {
        fn name(&self) -> &str {
            "shout"
        }

        fn description(&self) -> &str {
            "Uppercase everything"
        }

        fn apply(&self, source: &str) -> String {
            source.to_uppercase()
        }
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            STANDARD.rule_names(),
            vec![
                "join_line_continuations",
                "blank_directives",
                "merge_string_literals",
                "substitute_identifiers",
                "expand_min",
                "lower_va_start",
            ]
        );
    }

    #[test]
    fn test_rules_have_descriptions() {
        assert!(STANDARD.rules().all(|rule| !rule.description().is_empty()));
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = RewritePipeline::default();
        assert_eq!(pipeline.run("#include <x.h>\nbool b;\n"), "#include <x.h>\nbool b;\n");
    }

    #[test]
    fn test_custom_rule_runs_after_standard_rules() {
        let pipeline = RewritePipeline::standard().with(Shout);
        assert_eq!(pipeline.run("bool ok = true;\n"), "_BOOL OK = 1;\n");
    }

    #[test]
    fn test_multiline_define_is_blanked_whole() {
        let source = "#define unreachable() \\\n  error(\"internal error at %s:%d\", __FILE__, __LINE__)\nint x;\n";
        assert_eq!(rewrite(source), "\nint x;\n");
    }

    #[test]
    fn test_macro_definition_not_expanded() {
        let source = "#define MIN(x, y) ((x) < (y) ? (x) : (y))\nint m = MIN(a, b);\n";
        assert_eq!(rewrite(source), "\nint m = ((a)<(b)?(a):(b));\n");
    }

    #[test]
    fn test_run_until_stops_after_named_rule() {
        let source = "#include <stdbool.h>\nbool b = true;\n";
        assert_eq!(
            STANDARD.run_until(source, "blank_directives"),
            Some("\nbool b = true;\n".to_string())
        );
        assert_eq!(
            STANDARD.run_until(source, "lower_va_start"),
            Some(rewrite(source))
        );
        assert_eq!(STANDARD.run_until(source, "no_such_rule"), None);
    }
}
