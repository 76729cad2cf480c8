//! Source rewrite rules
//!
//! Each rule turns one whole document into the next. They are applied by
//! [`RewritePipeline`](crate::pipeline::RewritePipeline) in this order:
//! 1. join_line_continuations - splice `\`-newline continued lines ./line_continuation.rs
//! 2. blank_directives - empty every `#` directive line ./directives.rs
//! 3. merge_string_literals - join literals split across lines ./string_literals.rs
//! 4. substitute_identifiers - bool, errno, true, false, NULL, unreachable() ./identifiers.rs
//! 5. expand_min - inline `MIN(a, b)` ./min_macro.rs
//! 6. lower_va_start - turn `va_start(ap, last)` into a struct copy ./va_start.rs
//!
//! The order is load-bearing. Continuations must be joined before directives are blanked, or
//! the tail of a multi-line `#define` would survive as code. Directives must be gone before
//! literals are merged and identifiers rewritten, or macro definitions such as
//! `#define MIN(x, y) ...` would be expanded instead of dropped.
//!
//! Rules never look inside a syntax tree. They match text, which keeps them small and lets each
//! one be tested on its own through its free function.

pub mod arguments;
pub mod directives;
pub mod identifiers;
pub mod interface;
pub mod line_continuation;
pub mod min_macro;
pub mod string_literals;
pub mod va_start;

// Re-export the Rewrite trait
pub use interface::Rewrite;

// Re-export rule implementations
pub use directives::BlankDirectives;
pub use identifiers::SubstituteIdentifiers;
pub use line_continuation::JoinLineContinuations;
pub use min_macro::ExpandMin;
pub use string_literals::MergeStringLiterals;
pub use va_start::LowerVaStart;

// Re-export the pure rule functions
pub use directives::blank_directives;
pub use identifiers::substitute_identifiers;
pub use line_continuation::join_line_continuations;
pub use min_macro::expand_min;
pub use string_literals::merge_string_literals;
pub use va_start::lower_va_start;
