//! HTML tag stripping
//!
//! Block-level tags become line breaks so that headings, paragraphs and
//! list items never merge into one sentence.

use std::sync::OnceLock;

use regex::Regex;

fn script_or_style() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</\s*(?:script|style)\s*>")
            .expect("static pattern")
    })
}

fn block_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)</?(?:p|div|h[1-6]|li|ul|ol|br|blockquote|table|tr|td|th|pre|section|article|header|footer)\b[^>]*>",
        )
        .expect("static pattern")
    })
}

fn any_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[a-zA-Z/!][^>]*>").expect("static pattern"))
}

/// Remove HTML markup from text
pub fn strip_tags(text: &str) -> String {
    if !text.contains('<') {
        return text.replace("&nbsp;", " ");
    }

    let text = script_or_style().replace_all(text, " ");
    let text = block_tag().replace_all(&text, "\n");
    let text = any_tag().replace_all(&text, " ");
    text.replace("&nbsp;", " ")
}
