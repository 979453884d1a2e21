//! # simhash-rs: SimHash Document Fingerprinting
//!
//! Computes fixed-width SimHash fingerprints for text documents and scores
//! the similarity of two documents by the Hamming distance between their
//! fingerprints.
//!
//! ## Pipeline
//!
//! ```text
//! text ─► tokenize ─► weight ─► hash + accumulate ─► sign ─► fingerprint
//!          (lowercase,   (term      (MD5, fitted to     (> 0 → 1,
//!           stop words)   counts)    B bits, ±weight)    else 0)
//!
//! fingerprint × fingerprint ─► Hamming distance ─► similarity %
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use simhash_rs::{SimHashConfig, SimHashEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = SimHashEngine::new(SimHashConfig::default())?;
//!     let report = engine.compare_documents("text1.txt", "text2.txt")?;
//!
//!     println!("Hamming Distance: {}", report.hamming_distance);
//!     println!("Similarity: {}%", report.similarity);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Configuration, errors and document access
pub mod core {
    //! Configuration, error types and text sources.

    pub mod config;
    pub mod errors;
    pub mod text_source;
}

// Fingerprinting algorithms
pub mod detectors {
    //! Similarity detectors.

    pub mod simhash;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use api::engine::SimHashEngine;
pub use api::results::{ComparisonReport, DocumentFingerprint};
pub use core::config::{OutputFormat, SimHashConfig};
pub use core::errors::{Result, ResultExt, SimHashError};
pub use core::text_source::{FsTextSource, MemoryTextSource, TextSource};
pub use detectors::simhash::{Comparison, Fingerprint, SimHash};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
