//! Document text sources.
//!
//! The fingerprinting pipeline only needs a string; where it comes from is a
//! collaborator behind [`TextSource`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::errors::{Result, ResultExt, SimHashError};

/// Yields the full text of a document given its path.
pub trait TextSource {
    /// Read the whole document as a string.
    fn read_text(&self, path: &Path) -> Result<String>;
}

/// Reads documents from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTextSource;

impl FsTextSource {
    /// Create a filesystem text source
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for FsTextSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                warn!(
                    "File contained invalid UTF-8, converted with lossy encoding: {}",
                    path.display()
                );
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }
}

/// In-memory documents keyed by path.
#[derive(Debug, Default, Clone)]
pub struct MemoryTextSource {
    documents: HashMap<PathBuf, String>,
}

impl MemoryTextSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document, replacing any previous text at that path
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.documents.insert(path.into(), text.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_document(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }
}

impl TextSource for MemoryTextSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        self.documents.get(path).cloned().ok_or_else(|| {
            SimHashError::io(
                format!("Document not found: {}", path.display()),
                io::Error::new(io::ErrorKind::NotFound, "no such document"),
            )
        })
    }
}
