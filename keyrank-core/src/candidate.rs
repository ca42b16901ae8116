//! Candidate phrases
//!
//! A [`Candidate`] is one n-gram of the document together with how often it
//! occurs. Its relevance is derived on demand from the occurrence count, its
//! length and, for multi-word phrases, how many of its words are themselves
//! relevant single words.

use smallvec::SmallVec;

use crate::language::WordSet;
use crate::relevance::RelevanceMap;

/// Longest phrase the pipeline produces
pub const MAX_PHRASE_LENGTH: usize = 5;

/// Inline storage for the words of one phrase
pub type Words = SmallVec<[String; MAX_PHRASE_LENGTH]>;

/// Relevance multiplier for phrases of the given length
///
/// Single words get no bonus.
pub fn length_bonus(length: usize) -> Option<f64> {
    match length {
        2 => Some(3.0),
        3 => Some(7.0),
        4 => Some(12.0),
        5 => Some(18.0),
        _ => None,
    }
}

/// One n-gram of the document
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    words: Words,
    occurrences: usize,
    /// Single word found in the language's function-word list
    single_function_word: bool,
    /// Number of words present in the injected relevance map
    relevant_words: Option<usize>,
}

impl Candidate {
    /// Create a candidate with zero occurrences
    ///
    /// `function_words` is the complete function-word list of the language;
    /// a single-word candidate found in it is never relevant.
    pub fn new<I>(words: I, function_words: &WordSet) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let words: Words = words.into_iter().collect();
        let single_function_word = words.len() == 1 && function_words.contains(&words[0]);

        Self {
            words,
            occurrences: 0,
            single_function_word,
            relevant_words: None,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the phrase
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn first_word(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    pub fn last_word(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    /// The words joined by single spaces; identifies the candidate
    pub fn combination(&self) -> String {
        self.words.join(" ")
    }

    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    pub fn increment_occurrences(&mut self) {
        self.occurrences += 1;
    }

    /// Record which of this candidate's words are relevant single words
    pub fn set_relevant_words(&mut self, relevance_map: &RelevanceMap) {
        let count = self
            .words
            .iter()
            .filter(|word| relevance_map.contains(word))
            .count();
        self.relevant_words = Some(count);
    }

    /// Share of words that are relevant single words
    ///
    /// Always 1.0 for a single word. For longer phrases it stays 0.0 until
    /// [`set_relevant_words`](Self::set_relevant_words) has been called.
    pub fn relevant_word_percentage(&self) -> f64 {
        if self.words.len() <= 1 {
            return 1.0;
        }

        match self.relevant_words {
            Some(count) => count as f64 / self.words.len() as f64,
            None => 0.0,
        }
    }

    /// Relevance score; 0 means the candidate is not relevant
    pub fn relevance(&self) -> f64 {
        if self.single_function_word {
            return 0.0;
        }

        let percentage = self.relevant_word_percentage();
        if percentage == 0.0 {
            return 0.0;
        }

        let multiplier = match length_bonus(self.words.len()) {
            Some(bonus) => bonus * percentage,
            None => percentage,
        };

        multiplier * self.occurrences as f64
    }

    /// Share of the document's words taken up by this candidate
    pub fn density(&self, word_count: usize) -> f64 {
        if word_count == 0 {
            return 0.0;
        }
        self.occurrences as f64 / word_count as f64
    }
}
