//! Runtime lookup tables built from a language configuration
//!
//! All tables are immutable once built and are shared read-only across
//! extractions.

use std::collections::HashSet;

use crate::language::config::{FunctionWordLists, Sentences};

/// Set of lowercase words
pub type WordSet = HashSet<String>;

/// The five function-word lists of one language
#[derive(Debug, Clone, Default)]
pub struct FunctionWords {
    all: WordSet,
    filtered_anywhere: WordSet,
    filtered_at_beginning: WordSet,
    filtered_at_ending: WordSet,
    filtered_at_beginning_and_ending: WordSet,
}

impl FunctionWords {
    /// Build lookup sets from configured lists
    ///
    /// `all` is the union of every list, including `other`.
    pub fn from_lists(lists: &FunctionWordLists) -> Self {
        fn to_set(words: &[String]) -> WordSet {
            words.iter().cloned().collect()
        }

        Self {
            all: lists.iter_all().cloned().collect(),
            filtered_anywhere: to_set(&lists.filtered_anywhere),
            filtered_at_beginning: to_set(&lists.filtered_at_beginning),
            filtered_at_ending: to_set(&lists.filtered_at_ending),
            filtered_at_beginning_and_ending: to_set(&lists.filtered_at_beginning_and_ending),
        }
    }

    /// Every function word of the language
    pub fn all(&self) -> &WordSet {
        &self.all
    }

    /// Words that disqualify a phrase wherever they occur
    pub fn filtered_anywhere(&self) -> &WordSet {
        &self.filtered_anywhere
    }

    /// Words that may not open a phrase
    pub fn filtered_at_beginning(&self) -> &WordSet {
        &self.filtered_at_beginning
    }

    /// Words that may not close a phrase
    pub fn filtered_at_ending(&self) -> &WordSet {
        &self.filtered_at_ending
    }

    /// Words that may neither open nor close a phrase
    pub fn filtered_at_beginning_and_ending(&self) -> &WordSet {
        &self.filtered_at_beginning_and_ending
    }

    #[inline]
    pub fn is_function_word(&self, word: &str) -> bool {
        self.all.contains(word)
    }
}

/// Sentence terminators and abbreviations
#[derive(Debug, Clone)]
pub struct SentenceTable {
    terminators: Vec<char>,
    abbreviations: WordSet,
}

impl SentenceTable {
    /// Build from configuration
    pub fn from_config(sentences: &Sentences) -> Self {
        Self {
            terminators: sentences.terminators.clone(),
            abbreviations: sentences
                .abbreviations
                .iter()
                .map(|a| a.trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    /// Check a word (without its final dot) against the abbreviation list
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&word.to_lowercase())
    }

    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }
}

impl Default for SentenceTable {
    fn default() -> Self {
        Self::from_config(&Sentences::default())
    }
}
