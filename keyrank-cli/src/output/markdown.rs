//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use keyrank_core::Extraction;
use std::io::Write;

/// Markdown formatter - outputs a keyphrase table per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, extraction: &Extraction) -> Result<()> {
        self.document_count += 1;

        writeln!(self.writer, "## {}", source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Keyphrase | Relevance | Occurrences | Density |")?;
        writeln!(self.writer, "|---|-----------|-----------|-------------|---------|")?;
        for (rank, keyphrase) in extraction.keyphrases.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {:.2} | {} | {:.4} |",
                rank + 1,
                keyphrase.combination,
                keyphrase.relevance,
                keyphrase.occurrences,
                keyphrase.density
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
