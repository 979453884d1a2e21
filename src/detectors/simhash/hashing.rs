//! Per-token hash projection.
//!
//! Tokens are hashed with MD5 and the 16-byte digest is rendered as a string
//! of 128 `'0'`/`'1'` characters, most significant bit first within each byte.
//! The string is then fitted to the configured width B: longer strings keep
//! their leading B bits, shorter ones are left-padded with `'0'`. The digest
//! itself never changes with B; only the number of positions used does.

use std::fmt::Write;

/// Width of the MD5 digest in bits.
pub const DIGEST_BITS: usize = 128;

/// Deterministically maps bytes to a bit string.
///
/// Implementations must return only `'0'` and `'1'` characters and must
/// give the same output for the same input in every process.
pub trait TokenHasher {
    /// Hash `data` to a bit string of the hasher's native width.
    fn hash_bits(&self, data: &[u8]) -> String;
}

/// MD5-backed token hasher producing 128-bit strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct Md5Hasher;

impl TokenHasher for Md5Hasher {
    fn hash_bits(&self, data: &[u8]) -> String {
        let digest = md5::compute(data);
        digest_to_bits(&digest.0)
    }
}

/// Any `Fn(&[u8]) -> String` is a hasher.
impl<F> TokenHasher for F
where
    F: Fn(&[u8]) -> String,
{
    fn hash_bits(&self, data: &[u8]) -> String {
        self(data)
    }
}

/// Render digest bytes as eight bits each, MSB first.
pub fn digest_to_bits(digest: &[u8]) -> String {
    let mut bits = String::with_capacity(digest.len() * 8);
    for byte in digest {
        // Writing into a String cannot fail.
        let _ = write!(bits, "{byte:08b}");
    }
    bits
}

/// Fit a bit string to exactly `num_hash_bits` characters.
///
/// Truncation keeps the leading bits; padding prepends `'0'`, which treats
/// the missing high-order bits as zero. Non-ASCII input is first rewritten
/// one character per bit, with anything but `'1'` becoming `'0'`.
pub fn adapt_width(mut bits: String, num_hash_bits: usize) -> String {
    if !bits.is_ascii() {
        bits = bits
            .chars()
            .map(|ch| if ch == '1' { '1' } else { '0' })
            .collect();
    }
    let len = bits.len();
    if len > num_hash_bits {
        bits.truncate(num_hash_bits);
        bits
    } else if len < num_hash_bits {
        let mut padded = "0".repeat(num_hash_bits - len);
        padded.push_str(&bits);
        padded
    } else {
        bits
    }
}

/// Hash a token with MD5 and fit the result to `num_hash_bits`.
pub fn hash_bits(data: &[u8], num_hash_bits: usize) -> String {
    adapt_width(Md5Hasher.hash_bits(data), num_hash_bits)
}
