//! Per-language function-word tables and sentence rules
//!
//! Tables are data-driven: each language is one TOML document embedded in
//! the binary, and external tables can be loaded with
//! [`LanguageRules::from_file`].

pub mod config;
pub(crate) mod loader;
pub mod runtime;
pub mod tables;

pub use config::{FunctionWordLists, LanguageConfig};
pub use loader::{
    get_rules, is_supported, language_from_locale, supported_languages, DEFAULT_LANGUAGE,
};
pub use runtime::LanguageRules;
pub use tables::{FunctionWords, SentenceTable, WordSet};
