//! SimHash weight-vector construction and fingerprint extraction.

use tracing::debug;

use super::hashing::{adapt_width, Md5Hasher, TokenHasher};
use super::tokenizer::split_and_clean;
use super::types::{Fingerprint, TextSignature, WeightMap, WeightVector};
use super::weighting::count_occurrences;

/// SimHash fingerprint generator for a fixed width B.
///
/// Every vector and fingerprint produced by one instance is exactly
/// `num_hash_bits` long.
#[derive(Debug, Clone)]
pub struct SimHash<H = Md5Hasher> {
    num_hash_bits: usize,
    hasher: H,
}

impl SimHash<Md5Hasher> {
    /// Create a generator using the MD5 token hasher.
    pub fn new(num_hash_bits: usize) -> Self {
        Self::with_hasher(num_hash_bits, Md5Hasher)
    }
}

impl Default for SimHash<Md5Hasher> {
    fn default() -> Self {
        Self::new(128)
    }
}

impl<H: TokenHasher> SimHash<H> {
    /// Create a generator with a custom token hasher.
    pub fn with_hasher(num_hash_bits: usize, hasher: H) -> Self {
        Self {
            num_hash_bits,
            hasher,
        }
    }

    /// Fingerprint width B.
    pub fn num_hash_bits(&self) -> usize {
        self.num_hash_bits
    }

    /// Hash a token and fit it to B bits.
    pub fn token_bits(&self, token: &str) -> String {
        adapt_width(self.hasher.hash_bits(token.as_bytes()), self.num_hash_bits)
    }

    /// Accumulate signed, weighted votes for every bit position.
    ///
    /// A `'1'` at position i adds the token's weight to `vector[i]`; any other
    /// character subtracts it. Iteration order over `weights` does not matter.
    pub fn weights_vector(&self, weights: &WeightMap) -> WeightVector {
        let mut vector = vec![0i64; self.num_hash_bits];

        for (token, &weight) in weights {
            let weight = i64::try_from(weight).unwrap_or(i64::MAX);
            let bits = self.token_bits(token);

            for (slot, bit) in vector.iter_mut().zip(bits.bytes()) {
                if bit == b'1' {
                    *slot = slot.saturating_add(weight);
                } else {
                    *slot = slot.saturating_sub(weight);
                }
            }
        }

        vector
    }

    /// Collapse a weight vector into a fingerprint by sign.
    pub fn generate_fingerprint(&self, vector: &[i64]) -> Fingerprint {
        Fingerprint::from_weights(vector)
    }

    /// Fingerprint a pre-computed weight map.
    pub fn fingerprint_weights(&self, weights: &WeightMap) -> Fingerprint {
        self.generate_fingerprint(&self.weights_vector(weights))
    }

    /// Run the full pipeline on raw text.
    pub fn fingerprint_text(&self, text: &str) -> Fingerprint {
        self.analyze_text(text).fingerprint
    }

    /// Run the full pipeline and keep the token statistics.
    pub fn analyze_text(&self, text: &str) -> TextSignature {
        let tokens = split_and_clean(text);
        let weights = count_occurrences(&tokens);
        let fingerprint = self.fingerprint_weights(&weights);

        debug!(
            tokens = tokens.len(),
            distinct_terms = weights.len(),
            num_hash_bits = self.num_hash_bits,
            "Computed SimHash fingerprint"
        );

        TextSignature {
            fingerprint,
            token_count: tokens.len(),
            distinct_terms: weights.len(),
        }
    }
}
