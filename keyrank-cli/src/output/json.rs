//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use keyrank_core::{Extraction, ExtractionMetadata, Keyphrase};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file the keyphrases came from
    pub source: String,
    pub keyphrases: Vec<Keyphrase>,
    pub metadata: ExtractionMetadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, extraction: &Extraction) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            keyphrases: extraction.keyphrases.clone(),
            metadata: extraction.metadata.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
