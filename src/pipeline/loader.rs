//! File loading and compilation unit assembly
//!
//! `DocumentLoader` is the entry point the CLI uses: it reads each file, rewrites it, and
//! appends the result to a [`CompilationUnit`] that already holds the prelude.
//!
//! # Architecture
//!
//! - String-based methods are the core functionality (rewrite source text)
//! - File-based methods are thin wrappers (read file, then call the string method)
//! - The unit is built in memory; nothing reaches the caller until every file was read, so a
//!   missing file never yields a truncated unit that looks complete
//!
//! # Examples
//!
//! ```rust,ignore
//! use selfhost::pipeline::DocumentLoader;
//!
//! let loader = DocumentLoader::new();
//! let unit = loader.assemble(&["hashmap.c", "main.c"])?;
//! print!("{}", unit);
//! ```

use crate::pipeline::executor::{RewritePipeline, STANDARD};
use crate::prelude::PRELUDE;
use log::debug;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors while loading input files
#[derive(Debug)]
pub enum LoadError {
    /// The file is missing, cannot be opened, or is not valid UTF-8
    InputUnreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::InputUnreadable { path, source } => {
                write!(f, "cannot read '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::InputUnreadable { source, .. } => Some(source),
        }
    }
}

/// The prelude followed by every rewritten file, in argument order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    text: String,
}

impl CompilationUnit {
    /// A unit holding only the prelude
    pub fn new() -> Self {
        CompilationUnit {
            text: PRELUDE.to_string(),
        }
    }

    /// Append one rewritten chunk
    pub fn push(&mut self, chunk: &str) {
        self.text.push_str(chunk);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Default for CompilationUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CompilationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Reads source files and runs them through a rewrite pipeline
pub struct DocumentLoader<'p> {
    pipeline: &'p RewritePipeline,
}

impl DocumentLoader<'static> {
    /// Create a loader using the standard pipeline
    pub fn new() -> Self {
        DocumentLoader {
            pipeline: &STANDARD,
        }
    }
}

impl Default for DocumentLoader<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> DocumentLoader<'p> {
    /// Create a loader using a custom pipeline
    pub fn with_pipeline(pipeline: &'p RewritePipeline) -> Self {
        DocumentLoader { pipeline }
    }

    /// Get the pipeline
    pub fn pipeline(&self) -> &RewritePipeline {
        self.pipeline
    }

    /// Rewrite one document, terminating it with a newline
    pub fn rewrite(&self, source: &str) -> String {
        ensure_ends_with_newline(self.pipeline.run(source))
    }

    /// Read and rewrite one file
    pub fn load_and_rewrite<P: AsRef<Path>>(&self, path: P) -> Result<String, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoadError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded {} ({} bytes)", path.display(), source.len());
        Ok(self.rewrite(&source))
    }

    /// Build the prelude plus every file, stopping at the first unreadable one
    pub fn assemble<P: AsRef<Path>>(&self, paths: &[P]) -> Result<CompilationUnit, LoadError> {
        let mut unit = CompilationUnit::new();
        for path in paths {
            let chunk = self.load_and_rewrite(path)?;
            unit.push(&chunk);
        }
        debug!(
            "assembled {} file(s), {} bytes",
            paths.len(),
            unit.as_str().len()
        );
        Ok(unit)
    }
}

/// Append a newline to non-empty text that lacks one
pub fn ensure_ends_with_newline(mut text: String) -> String {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
