//! Runtime language rules
//!
//! Bridges a parsed [`LanguageConfig`] and the lookup tables the extraction
//! pipeline reads.

use std::path::Path;

use crate::error::{Error, Result};
use crate::language::config::LanguageConfig;
use crate::language::tables::{FunctionWords, SentenceTable};

/// Everything the pipeline needs to know about one language
#[derive(Debug, Clone)]
pub struct LanguageRules {
    code: String,
    name: String,
    sentences: SentenceTable,
    function_words: FunctionWords,
}

impl LanguageRules {
    /// Create from configuration
    pub fn from_config(config: &LanguageConfig) -> std::result::Result<Self, String> {
        config.validate()?;

        Ok(Self {
            code: config.metadata.code.trim().to_lowercase(),
            name: config.metadata.name.clone(),
            sentences: SentenceTable::from_config(&config.sentences),
            function_words: FunctionWords::from_lists(&config.function_words),
        })
    }

    /// Parse and validate a TOML language table
    ///
    /// `source_name` is only used in error messages.
    pub fn from_toml_str(toml_str: &str, source_name: &str) -> Result<Self> {
        let config: LanguageConfig =
            toml::from_str(toml_str).map_err(|e| Error::LanguageConfig {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;

        Self::from_config(&config).map_err(|reason| Error::LanguageConfig {
            source_name: source_name.to_string(),
            reason,
        })
    }

    /// Load an external language table from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Rules with default terminators and no function words
    pub(crate) fn fallback() -> Self {
        Self {
            code: "en".to_string(),
            name: "English".to_string(),
            sentences: SentenceTable::default(),
            function_words: FunctionWords::default(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sentences(&self) -> &SentenceTable {
        &self.sentences
    }

    pub fn function_words(&self) -> &FunctionWords {
        &self.function_words
    }
}
