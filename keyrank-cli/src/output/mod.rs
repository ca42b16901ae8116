//! Output formatting module

use crate::error::CliError;
use anyhow::Result;
use keyrank_core::Extraction;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the keyphrases of one document
    fn format_document(&mut self, source: &str, extraction: &Extraction) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Ranked keyphrases, one per line
    Text,
    /// JSON array of documents with keyphrases and metadata
    Json,
    /// Markdown table per document
    Markdown,
}

impl OutputFormat {
    /// Parse a format name as used in configuration files
    pub fn parse(name: &str) -> Result<Self, CliError> {
        <Self as clap::ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")))
    }

    /// Create a formatter writing to `writer`
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use keyrank_core::{Extraction, ExtractionMetadata, Keyphrase};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Writer whose contents stay readable after the formatter is dropped
    #[derive(Clone, Default)]
    pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn sample_extraction() -> Extraction {
        Extraction {
            keyphrases: vec![
                Keyphrase {
                    words: vec!["search".into(), "engine".into()],
                    combination: "search engine".into(),
                    length: 2,
                    occurrences: 4,
                    relevance: 12.0,
                    density: 0.016,
                },
                Keyphrase {
                    words: vec!["search".into()],
                    combination: "search".into(),
                    length: 1,
                    occurrences: 4,
                    relevance: 4.0,
                    density: 0.016,
                },
            ],
            metadata: ExtractionMetadata {
                language: "en".into(),
                word_count: 250,
                sentence_count: 12,
                candidates_considered: 900,
                processing_time_ms: 1.5,
            },
        }
    }
}
