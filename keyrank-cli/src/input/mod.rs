//! Locating and reading the documents to extract keyphrases from
//!
//! Patterns resolve to a sorted, deduplicated file list, and each file is
//! read as one UTF-8 document.

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{FileReader, InputDocument};
pub use glob_resolver::resolve_patterns;
