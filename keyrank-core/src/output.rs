//! Output types

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;

/// A ranked keyphrase as exposed to scoring rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyphrase {
    /// Lowercase words of the phrase
    pub words: Vec<String>,
    /// The words joined by single spaces
    pub combination: String,
    /// Number of words
    pub length: usize,
    /// How often the exact phrase occurs
    pub occurrences: usize,
    /// Relevance score, higher is better
    pub relevance: f64,
    /// `occurrences / word_count`
    pub density: f64,
}

impl Keyphrase {
    /// Snapshot a candidate against the document's word count
    pub fn from_candidate(candidate: &Candidate, word_count: usize) -> Self {
        Self {
            words: candidate.words().to_vec(),
            combination: candidate.combination(),
            length: candidate.len(),
            occurrences: candidate.occurrences(),
            relevance: candidate.relevance(),
            density: candidate.density(word_count),
        }
    }
}

/// Metadata about one extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Code of the language table actually used
    pub language: String,
    /// Total number of words in the document
    pub word_count: usize,
    /// Number of sentences in the document
    pub sentence_count: usize,
    /// Candidates entering the filter pipeline
    pub candidates_considered: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

/// Ranked keyphrases of one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Keyphrases, highest relevance first
    pub keyphrases: Vec<Keyphrase>,
    pub metadata: ExtractionMetadata,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.keyphrases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keyphrases.len()
    }

    /// Find a keyphrase by its space-joined words
    pub fn get(&self, combination: &str) -> Option<&Keyphrase> {
        self.keyphrases
            .iter()
            .find(|keyphrase| keyphrase.combination == combination)
    }
}
