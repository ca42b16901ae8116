//! Extraction configuration

use serde::{Deserialize, Serialize};

use crate::candidate::MAX_PHRASE_LENGTH;
use crate::error::{Error, Result};
use crate::language::DEFAULT_LANGUAGE;

/// Default configuration constants
pub mod defaults {
    /// Maximum number of keyphrases returned
    pub const RESULT_LIMIT: usize = 100;

    /// Number of top single words that form the relevance map
    ///
    /// Fixed so that `result_limit` never changes relevance scores.
    pub const SINGLE_WORD_LIMIT: usize = 100;

    /// Longest phrase considered
    pub const MAX_PHRASE_LENGTH: usize = crate::candidate::MAX_PHRASE_LENGTH;

    /// Inclusive lower density bound
    pub const DENSITY_LOWER_LIMIT: f64 = 0.0;

    /// Exclusive upper density bound
    pub const DENSITY_UPPER_LIMIT: f64 = 0.03;

    /// Documents shorter than this are not density-filtered
    pub const WORD_COUNT_LOWER_LIMIT: usize = 200;
}

/// Extraction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language or locale code; unsupported codes fall back to English
    pub language: String,
    pub result_limit: usize,
    pub max_phrase_length: usize,
    pub density_lower_limit: f64,
    pub density_upper_limit: f64,
    pub word_count_lower_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            result_limit: defaults::RESULT_LIMIT,
            max_phrase_length: defaults::MAX_PHRASE_LENGTH,
            density_lower_limit: defaults::DENSITY_LOWER_LIMIT,
            density_upper_limit: defaults::DENSITY_UPPER_LIMIT,
            word_count_lower_limit: defaults::WORD_COUNT_LOWER_LIMIT,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.result_limit == 0 {
            return Err(Error::Configuration(
                "result_limit must be greater than 0".into(),
            ));
        }

        if !(1..=MAX_PHRASE_LENGTH).contains(&self.max_phrase_length) {
            return Err(Error::Configuration(format!(
                "max_phrase_length must be between 1 and {MAX_PHRASE_LENGTH}"
            )));
        }

        if !self.density_lower_limit.is_finite() || !self.density_upper_limit.is_finite() {
            return Err(Error::Configuration(
                "density limits must be finite".into(),
            ));
        }

        if self.density_lower_limit >= self.density_upper_limit {
            return Err(Error::Configuration(
                "density_lower_limit must be below density_upper_limit".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language or locale code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.config.language = code.into();
        self
    }

    /// Set the maximum number of keyphrases
    pub fn result_limit(mut self, limit: usize) -> Self {
        self.config.result_limit = limit;
        self
    }

    /// Set the longest phrase length (1 to 5)
    pub fn max_phrase_length(mut self, length: usize) -> Self {
        self.config.max_phrase_length = length;
        self
    }

    /// Set the accepted density range `[lower, upper)`
    pub fn density_limits(mut self, lower: f64, upper: f64) -> Self {
        self.config.density_lower_limit = lower;
        self.config.density_upper_limit = upper;
        self
    }

    /// Set the word count from which density filtering applies
    pub fn word_count_lower_limit(mut self, words: usize) -> Self {
        self.config.word_count_lower_limit = words;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
