//! Ranked keyphrase candidate extraction
//!
//! This crate turns a document into a ranked list of its most significant
//! multi-word phrases, the input consumed by content-quality scoring rules
//! such as keyword density checks.
//!
//! # Pipeline
//!
//! - **Generation**: every 1- to 5-word window of each sentence becomes a
//!   [`Candidate`]; windows never cross sentence boundaries
//! - **Aggregation**: duplicates collapse into one candidate with an
//!   occurrence count
//! - **Filtering**: candidates made of single characters, special tokens or
//!   badly placed function words are dropped
//! - **Ranking**: single-word relevance feeds into multi-word relevance, and
//!   the result is sorted by relevance, then by length
//!
//! Function-word lists and sentence rules are per-language TOML tables,
//! embedded for English, German, Dutch, French, Spanish and Italian.
//!
//! # Example
//!
//! ```rust
//! use keyrank_core::KeyphraseExtractor;
//!
//! let extractor = KeyphraseExtractor::with_language("en_US");
//! let extraction = extractor.extract("The cat sat on the mat. The cat sat on the mat.");
//!
//! let top = &extraction.keyphrases[0];
//! assert_eq!(top.combination, "cat sat on the mat");
//! assert_eq!(top.occurrences, 2);
//!
//! // "the" never opens or closes a keyphrase
//! assert!(extraction.get("the cat").is_none());
//! ```

pub mod aggregate;
pub mod candidate;
pub mod config;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod generator;
pub mod language;
pub mod output;
pub mod rank;
pub mod relevance;
pub mod text;

pub use aggregate::count_occurrences;
pub use candidate::{Candidate, MAX_PHRASE_LENGTH};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use extractor::{relevant_words, KeyphraseExtractor};
pub use filter::{filter_combinations, FilterStage};
pub use generator::generate_combinations;
pub use language::{get_rules, language_from_locale, supported_languages, LanguageRules};
pub use output::{Extraction, ExtractionMetadata, Keyphrase};
pub use rank::sort_candidates;
pub use relevance::RelevanceMap;
