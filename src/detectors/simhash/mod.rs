//! SimHash document fingerprinting.
//!
//! Pipeline: text → [`split_and_clean`] → [`count_occurrences`] →
//! [`SimHash::weights_vector`] → [`SimHash::generate_fingerprint`].
//! Two fingerprints of equal width are scored with [`compare`].

pub mod comparison;
pub mod generator;
pub mod hashing;
pub mod tokenizer;
pub mod types;
pub mod weighting;


pub use comparison::{compare, hamming_distance, similarity_percent, Comparison};
pub use generator::SimHash;
pub use hashing::{adapt_width, hash_bits, Md5Hasher, TokenHasher, DIGEST_BITS};
pub use tokenizer::{is_stop_word, split_and_clean, STOP_WORDS};
pub use types::{Fingerprint, TextSignature, WeightMap, WeightVector};
pub use weighting::count_occurrences;
