//! Hamming distance and similarity scoring between fingerprints.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{Result, SimHashError};

use super::types::Fingerprint;

/// Distance and score for one fingerprint pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Shared fingerprint width
    pub num_hash_bits: usize,
    /// Number of differing bit positions
    pub hamming_distance: usize,
    /// Integer percentage in [0, 100]
    pub similarity: usize,
}

/// Count the positions at which two fingerprints differ.
///
/// Fingerprints of different widths are rejected rather than compared over
/// the shorter prefix.
pub fn hamming_distance(first: &Fingerprint, second: &Fingerprint) -> Result<usize> {
    if first.len() != second.len() {
        return Err(SimHashError::length_mismatch(first.len(), second.len()));
    }

    Ok(first
        .as_str()
        .bytes()
        .zip(second.as_str().bytes())
        .filter(|(a, b)| a != b)
        .count())
}

/// `100 - 100 * distance / num_hash_bits` with truncating division.
///
/// A zero-width pair has nothing to disagree on and scores 100.
pub fn similarity_percent(distance: usize, num_hash_bits: usize) -> usize {
    if num_hash_bits == 0 {
        return 100;
    }
    100usize.saturating_sub(100 * distance / num_hash_bits)
}

/// Compare two fingerprints of the same width.
pub fn compare(first: &Fingerprint, second: &Fingerprint) -> Result<Comparison> {
    let hamming_distance = hamming_distance(first, second)?;
    let num_hash_bits = first.len();
    let similarity = similarity_percent(hamming_distance, num_hash_bits);

    debug!(
        num_hash_bits,
        hamming_distance, similarity, "Compared fingerprints"
    );

    Ok(Comparison {
        num_hash_bits,
        hamming_distance,
        similarity,
    })
}
