//! Tokenization and stop-word filtering.
//!
//! Text is lowercased and split on runs of whitespace. Punctuation stays
//! attached to its word, so `"end."` and `"end"` are different tokens; the
//! fingerprints this crate produces depend on that.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::debug;

/// Common English function words and contracted negations dropped before weighting.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "is", "at", "of", "on", "and", "a", "to", "in", "that", "i", "me", "my",
        "myself", "we", "our", "ours", "ourselves", "you", "your", "yours", "yourself",
        "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it",
        "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "these", "those", "am", "are", "was", "were", "be", "been",
        "being", "have", "has", "had", "having", "do", "does", "did", "doing", "but", "if",
        "or", "because", "as", "until", "while", "by", "for", "with", "about", "against",
        "between", "into", "through", "during", "before", "after", "above", "below", "from",
        "up", "down", "out", "off", "over", "under", "again", "further", "then", "once",
        "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few",
        "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same",
        "so", "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
        "weren't", "mustn't", "wasn't", "hasn't", "haven't", "hadn't", "isn't", "aren't",
        "doesn't",
    ]
    .into_iter()
    .collect()
});

/// Check whether a lowercase token is a stop word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Split text into lowercase tokens, dropping stop words.
///
/// Lowercasing is per character, so a word-final `'Σ'` becomes `'σ'`.
/// Surviving tokens keep their source order.
pub fn split_and_clean(text: &str) -> Vec<String> {
    let lowered: String = text.chars().flat_map(char::to_lowercase).collect();
    let mut total = 0usize;

    let tokens: Vec<String> = lowered
        .split_whitespace()
        .inspect(|_| total += 1)
        .filter(|token| !is_stop_word(token))
        .map(str::to_owned)
        .collect();

    debug!(
        "Tokenized {} words, {} kept after stop-word filtering",
        total,
        tokens.len()
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_any_whitespace() {
        let tokens = split_and_clean("  Rust\tCompiler\n\nBorrow   CHECKER  ");
        assert_eq!(tokens, vec!["rust", "compiler", "borrow", "checker"]);
    }

    #[test]
    fn test_drops_stop_words_keeping_order() {
        let tokens = split_and_clean("The cat is on the mat and it sleeps");
        assert_eq!(tokens, vec!["cat", "mat", "sleeps"]);
    }

    #[test]
    fn test_contractions_are_stop_words() {
        let tokens = split_and_clean("It Isn't here, weren't they?");
        assert_eq!(tokens, vec!["here,", "they?"]);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let tokens = split_and_clean("The end. THE END");
        assert_eq!(tokens, vec!["end.", "end"]);
    }

    #[test]
    fn test_final_sigma_lowercases_to_plain_sigma() {
        assert_eq!(split_and_clean("ΟΔΟΣ"), vec!["οδοσ"]);
        assert_eq!(split_and_clean("ΟΔΟΣ οδοσ"), vec!["οδοσ", "οδοσ"]);
    }

    #[test]
    fn test_only_stop_words_yields_nothing() {
        assert!(split_and_clean("the and of to in").is_empty());
        assert!(split_and_clean("").is_empty());
        assert!(split_and_clean(" \n\t ").is_empty());
    }

    #[test]
    fn test_stop_word_set_is_lowercase() {
        assert!(STOP_WORDS.iter().all(|w| w.to_lowercase() == *w));
        assert!(is_stop_word("doesn't"));
        assert!(!is_stop_word("The"));
    }
}
