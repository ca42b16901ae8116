//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use keyrank_core::Extraction;
use std::io::Write;

/// Plain text formatter - outputs one keyphrase per line
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, extraction: &Extraction) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        writeln!(
            self.writer,
            "==> {} ({} words, {}) <==",
            source, extraction.metadata.word_count, extraction.metadata.language
        )?;
        for keyphrase in &extraction.keyphrases {
            writeln!(
                self.writer,
                "{:>8.2}  {:>4}x  {}",
                keyphrase.relevance, keyphrase.occurrences, keyphrase.combination
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample_extraction, SharedBuffer};

    #[test]
    fn test_text_output() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        formatter
            .format_document("article.txt", &sample_extraction())
            .unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "==> article.txt (250 words, en) <==");
        assert_eq!(lines[1], "   12.00     4x  search engine");
        assert_eq!(lines[2], "    4.00     4x  search");
    }

    #[test]
    fn test_documents_are_separated() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        formatter.format_document("a.txt", &sample_extraction()).unwrap();
        formatter.format_document("b.txt", &sample_extraction()).unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        assert!(output.contains("\n\n==> b.txt"));
    }
}
