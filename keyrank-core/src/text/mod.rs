//! Text collaborators: markup stripping, sentence segmentation, quote
//! normalization and word tokenization

pub mod html;
pub mod quotes;
pub mod sentences;
pub mod words;

pub use html::strip_tags;
pub use quotes::normalize_quotes;
pub use sentences::SentenceSegmenter;
pub use words::words;
