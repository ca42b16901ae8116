//! Combination generator
//!
//! Slides a fixed-size window over the words of every sentence. Windows
//! never cross a sentence boundary.

use crate::candidate::{Candidate, MAX_PHRASE_LENGTH};
use crate::language::{LanguageRules, WordSet};
use crate::text::{normalize_quotes, words, SentenceSegmenter};

/// Segment text and tokenize each sentence into lowercase words
pub fn prepare_sentences(text: &str, rules: &LanguageRules) -> Vec<Vec<String>> {
    SentenceSegmenter::new(rules)
        .segment(text)
        .iter()
        .map(|sentence| words(&normalize_quotes(&sentence.to_lowercase())))
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Emit one candidate per window position, in document order
///
/// Duplicates are kept; see [`count_occurrences`](crate::aggregate::count_occurrences).
///
/// # Panics
///
/// Panics if `window` is not in `1..=MAX_PHRASE_LENGTH`.
pub fn combinations_from_sentences(
    sentences: &[Vec<String>],
    window: usize,
    function_words: &WordSet,
) -> Vec<Candidate> {
    assert!(
        (1..=MAX_PHRASE_LENGTH).contains(&window),
        "window size must be between 1 and {MAX_PHRASE_LENGTH}, got {window}"
    );

    sentences
        .iter()
        .flat_map(|sentence| sentence.windows(window))
        .map(|slice| Candidate::new(slice.iter().cloned(), function_words))
        .collect()
}

/// Generate all `window`-word combinations of a text
///
/// # Panics
///
/// Panics if `window` is not in `1..=MAX_PHRASE_LENGTH`.
pub fn generate_combinations(text: &str, window: usize, rules: &LanguageRules) -> Vec<Candidate> {
    let sentences = prepare_sentences(text, rules);
    combinations_from_sentences(&sentences, window, rules.function_words().all())
}
