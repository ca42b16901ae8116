//! Error types
//!
//! Extraction itself never fails; errors only come from configuration and
//! from loading external language tables.

use thiserror::Error;

/// Errors raised while configuring an extractor or loading language tables
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid extractor configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A language table could not be parsed or failed validation
    #[error("invalid language configuration in {source_name}: {reason}")]
    LanguageConfig {
        /// File path or embedded table name
        source_name: String,
        /// What was wrong with it
        reason: String,
    },

    /// I/O error while reading a language table
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible keyrank operations
pub type Result<T> = std::result::Result<T, Error>;
