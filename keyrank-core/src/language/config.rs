//! Configuration structures and validation
//!
//! This module defines the TOML schema for language tables.

use serde::{Deserialize, Serialize};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub sentences: Sentences,
    #[serde(default)]
    pub function_words: FunctionWordLists,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Sentence segmentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentences {
    #[serde(default = "default_terminators")]
    pub terminators: Vec<char>,
    /// Lowercase abbreviations without their final dot
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

impl Default for Sentences {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
            abbreviations: Vec::new(),
        }
    }
}

/// Function-word lists as written in the table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionWordLists {
    #[serde(default)]
    pub filtered_anywhere: Vec<String>,
    #[serde(default)]
    pub filtered_at_beginning: Vec<String>,
    #[serde(default)]
    pub filtered_at_ending: Vec<String>,
    #[serde(default)]
    pub filtered_at_beginning_and_ending: Vec<String>,
    /// Words that only count as function words on their own
    #[serde(default)]
    pub other: Vec<String>,
}

impl FunctionWordLists {
    /// Iterate over every word in every list
    pub fn iter_all(&self) -> impl Iterator<Item = &String> {
        self.filtered_anywhere
            .iter()
            .chain(&self.filtered_at_beginning)
            .chain(&self.filtered_at_ending)
            .chain(&self.filtered_at_beginning_and_ending)
            .chain(&self.other)
    }
}

fn default_terminators() -> Vec<char> {
    vec!['.', '!', '?']
}

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("language code must not be empty".to_string());
        }

        if self.sentences.terminators.is_empty() {
            return Err("no sentence terminators defined".to_string());
        }

        // Tokens are lowercased before lookup, so uppercase entries could never match
        for word in self.function_words.iter_all() {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(format!("invalid function word {word:?}"));
            }
            if *word != word.to_lowercase() {
                return Err(format!("function word {word:?} must be lowercase"));
            }
        }

        Ok(())
    }
}
