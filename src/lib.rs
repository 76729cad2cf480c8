//! # selfhost
//!
//! Prepares C sources for a minimal self-hosting compiler that has no system headers and
//! no preprocessor.
//!
//! Output is one compilation unit: the [prelude](prelude::PRELUDE) of header substitutes,
//! then each input file rewritten by the [rule pipeline](pipeline::RewritePipeline) in the
//! order given. See [`rewriting`] for the rules and why their order matters.
//!
//! ```rust,ignore
//! use selfhost::pipeline::DocumentLoader;
//!
//! let unit = DocumentLoader::new().assemble(&["tokenize.c", "parse.c"])?;
//! print!("{}", unit);
//! ```

pub mod pipeline;
pub mod prelude;
pub mod rewriting;

pub use pipeline::{rewrite, CompilationUnit, DocumentLoader, LoadError, RewritePipeline};
pub use prelude::PRELUDE;
