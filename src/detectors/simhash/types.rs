//! Value types flowing through the fingerprint pipeline.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SimHashError};

/// Distinct token to occurrence count.
pub type WeightMap = HashMap<String, usize>;

/// Signed per-bit accumulator of length B.
pub type WeightVector = Vec<i64>;

/// B-bit SimHash fingerprint stored as a `'0'`/`'1'` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Collapse a signed vector by sign; zero maps to `'0'`.
    pub fn from_weights(vector: &[i64]) -> Self {
        Self(
            vector
                .iter()
                .map(|&value| if value > 0 { '1' } else { '0' })
                .collect(),
        )
    }

    /// Parse a user-supplied bit string.
    pub fn parse(bits: &str) -> Result<Self> {
        if let Some((index, ch)) = bits.char_indices().find(|(_, c)| *c != '0' && *c != '1') {
            return Err(SimHashError::invalid_bit(index, ch));
        }
        Ok(Self(bits.to_owned()))
    }

    /// Width in bits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-width fingerprint
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw bit string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate bits from position 0
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits().filter(|&bit| bit).count()
    }

    /// Lowercase hex rendering; the bit string is left-padded with zeros to a
    /// multiple of four first.
    pub fn to_hex(&self) -> String {
        let pad = (4 - self.len() % 4) % 4;
        let padded: Vec<u8> = std::iter::repeat(b'0')
            .take(pad)
            .chain(self.0.bytes())
            .collect();

        padded
            .chunks(4)
            .map(|nibble| {
                let value = nibble
                    .iter()
                    .fold(0u32, |acc, &b| (acc << 1) | u32::from(b == b'1'));
                char::from_digit(value, 16).unwrap_or('0')
            })
            .collect()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = SimHashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = SimHashError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Fingerprint> for String {
    fn from(value: Fingerprint) -> Self {
        value.0
    }
}

/// Fingerprint plus the statistics gathered while computing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSignature {
    /// The document fingerprint
    pub fingerprint: Fingerprint,
    /// Tokens left after stop-word filtering
    pub token_count: usize,
    /// Distinct tokens among them
    pub distinct_terms: usize,
}
