//! Language source management for CLI

use crate::error::CliError;
use keyrank_core::{get_rules, language_from_locale, LanguageRules};
use std::path::PathBuf;
use std::sync::Arc;

/// Source of language rules
#[derive(Debug, Clone)]
pub enum LanguageSource {
    /// Embedded table, by language or locale code
    BuiltIn(String),
    /// External configuration file
    External(PathBuf),
}

impl LanguageSource {
    /// Pick the external file when given, the embedded table otherwise
    pub fn from_args(language: &str, language_config: Option<&PathBuf>) -> Self {
        match language_config {
            Some(path) => LanguageSource::External(path.clone()),
            None => LanguageSource::BuiltIn(language.to_string()),
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(code) => format!("Built-in: {}", language_from_locale(code)),
            LanguageSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the rules this source points at
    ///
    /// Unsupported built-in codes fall back to English.
    pub fn load(&self) -> Result<Arc<LanguageRules>, CliError> {
        match self {
            LanguageSource::BuiltIn(code) => Ok(get_rules(code)),
            LanguageSource::External(path) => LanguageRules::from_file(path)
                .map(Arc::new)
                .map_err(|e| CliError::LanguageError(e.to_string())),
        }
    }
}
