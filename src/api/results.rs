//! Fingerprint and comparison results for public API consumption.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::detectors::simhash::{Comparison, Fingerprint, TextSignature};

/// Fingerprint of one document together with its token statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFingerprint {
    /// Where the text came from
    pub source: PathBuf,

    /// B-bit fingerprint
    pub fingerprint: Fingerprint,

    /// Tokens left after stop-word filtering
    pub token_count: usize,

    /// Distinct tokens among them
    pub distinct_terms: usize,
}

impl DocumentFingerprint {
    /// Attach a source path to a computed signature
    pub fn from_signature(source: impl Into<PathBuf>, signature: TextSignature) -> Self {
        Self {
            source: source.into(),
            fingerprint: signature.fingerprint,
            token_count: signature.token_count,
            distinct_terms: signature.distinct_terms,
        }
    }

    /// True when every token was a stop word (or the text was blank)
    pub fn is_empty_document(&self) -> bool {
        self.token_count == 0
    }
}

/// Result of comparing two documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// First document
    pub first: DocumentFingerprint,

    /// Second document
    pub second: DocumentFingerprint,

    /// Shared fingerprint width
    pub num_hash_bits: usize,

    /// Number of differing bit positions
    pub hamming_distance: usize,

    /// Integer similarity percentage in [0, 100]
    pub similarity: usize,
}

impl ComparisonReport {
    /// Combine two document fingerprints with their comparison
    pub fn new(
        first: DocumentFingerprint,
        second: DocumentFingerprint,
        comparison: Comparison,
    ) -> Self {
        Self {
            first,
            second,
            num_hash_bits: comparison.num_hash_bits,
            hamming_distance: comparison.hamming_distance,
            similarity: comparison.similarity,
        }
    }

    /// Both documents produced the same fingerprint
    pub fn is_identical(&self) -> bool {
        self.hamming_distance == 0
    }
}
