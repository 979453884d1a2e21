//! Term weighting by occurrence count.

use super::types::WeightMap;

/// Count how often each distinct token occurs.
pub fn count_occurrences<S: AsRef<str>>(tokens: &[S]) -> WeightMap {
    let mut weights = WeightMap::with_capacity(tokens.len());
    for token in tokens {
        *weights.entry(token.as_ref().to_owned()).or_insert(0) += 1;
    }
    weights
}
