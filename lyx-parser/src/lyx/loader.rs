//! Document loading utilities
//!
//! `DocumentLoader` reads source text from a file or takes it from a string
//! and hands it to the parser. Reading is a single scoped full-read; I/O
//! errors propagate unchanged as `std::io::Error`. The write-side companion
//! is [`Document::to_file`](crate::lyx::ast::Document::to_file).
//!
//! # Example
//!
//! ```rust,ignore
//! use lyx_parser::lyx::loader::DocumentLoader;
//!
//! let loader = DocumentLoader::from_path("report_default.lyx")?;
//! let outcome = loader.parse();
//! assert!(outcome.is_clean());
//! ```

use crate::lyx::parsing::{parse_document, ParseOutcome};
use std::fs;
use std::io;
use std::path::Path;

/// Loads source text and runs the parser on it.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load source text from a file.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            source: fs::read_to_string(path)?,
        })
    }

    /// Use an in-memory string as the source.
    pub fn from_string(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The raw source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse the loaded source.
    pub fn parse(&self) -> ParseOutcome {
        parse_document(&self.source)
    }
}
