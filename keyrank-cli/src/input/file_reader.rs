//! Reading input documents for extraction

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// One input document, ready for keyphrase extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    pub path: PathBuf,
    pub text: String,
}

impl InputDocument {
    /// Name used to label this document's results
    pub fn source(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads UTF-8 documents from disk
pub struct FileReader;

impl FileReader {
    /// Read a document as UTF-8 text
    ///
    /// A leading byte order mark is dropped so it does not stick to the
    /// first word of the document.
    pub fn read_document(path: &Path) -> Result<InputDocument> {
        let text = fs::read_to_string(path).with_context(|| {
            format!(
                "Failed to read input document for extraction: {}",
                path.display()
            )
        })?;

        let text = match text.strip_prefix(BYTE_ORDER_MARK) {
            Some(stripped) => stripped.to_string(),
            None => text,
        };

        Ok(InputDocument {
            path: path.to_path_buf(),
            text,
        })
    }
}
