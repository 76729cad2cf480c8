//! Rewrite pipeline and compilation unit assembly
//!
//! This module provides:
//! - Ordered rule execution (`RewritePipeline`) with the standard order in `STANDARD`
//! - File loading (`DocumentLoader`) that builds the prelude plus every rewritten file into a
//!   single `CompilationUnit`

pub mod executor;
pub mod loader;

pub use executor::{rewrite, RewritePipeline, STANDARD};
pub use loader::{ensure_ends_with_newline, CompilationUnit, DocumentLoader, LoadError};
