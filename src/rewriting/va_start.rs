//! `va_start` lowering
//!
//! For a variadic function the compiler reserves a register save area in the frame and names
//! it `__va_area__`; its first bytes have the same shape as `__va_elem` from the prelude.
//! `va_start(ap, last)` becomes a struct copy of that area into the cursor, which is what the
//! builtin does on a full compiler. The second argument is only used by the real macro and is
//! dropped.
//!
//! Calls that do not have exactly two top-level arguments are left as written.

use crate::rewriting::arguments::scan_arguments;
use crate::rewriting::Rewrite;
use once_cell::sync::Lazy;
use regex::Regex;

static VA_START_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bva_start\(").unwrap());

/// Rewrites `va_start(ap, last)` into an assignment from `__va_area__`
pub struct LowerVaStart;

impl Rewrite for LowerVaStart {
    fn name(&self) -> &str {
        "lower_va_start"
    }

    fn description(&self) -> &str {
        "Replace va_start(ap, last) with a copy of the frame's register save area into ap"
    }

    fn apply(&self, source: &str) -> String {
        lower_va_start(source)
    }
}

/// Rewrite every two-argument `va_start` call
pub fn lower_va_start(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut cursor = 0;

    while let Some(found) = VA_START_CALL.find_at(source, cursor) {
        let call = scan_arguments(source, found.end());
        match call.as_ref().and_then(|c| c.exactly(2).map(|args| (c.end(), args))) {
            Some((end, args)) => {
                result.push_str(&source[cursor..found.start()]);
                result.push_str(&format!("*({})=*(__va_elem*)__va_area__", args[0]));
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
