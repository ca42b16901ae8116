//! Rule-based sentence segmentation
//!
//! Boundaries come from the language's terminator characters, with
//! abbreviations and single-letter initials suppressing a boundary at `.`.
//! A line break always ends a sentence.

use crate::language::{LanguageRules, SentenceTable};
use crate::text::html::strip_tags;

/// Splits text into sentences using one language's [`SentenceTable`]
#[derive(Debug, Clone, Copy)]
pub struct SentenceSegmenter<'a> {
    table: &'a SentenceTable,
}

impl<'a> SentenceSegmenter<'a> {
    /// Create a segmenter for a language
    pub fn new(rules: &'a LanguageRules) -> Self {
        Self::with_table(rules.sentences())
    }

    pub fn with_table(table: &'a SentenceTable) -> Self {
        Self { table }
    }

    /// Split text into trimmed, non-empty sentences in document order
    pub fn segment(&self, text: &str) -> Vec<String> {
        let text = strip_tags(text);
        let mut sentences = Vec::new();

        for line in text.lines() {
            self.segment_line(line, &mut sentences);
        }

        sentences
    }

    fn segment_line(&self, line: &str, sentences: &mut Vec<String>) {
        let chars: Vec<(usize, char)> = line.char_indices().collect();
        let byte_at = |idx: usize| chars.get(idx).map_or(line.len(), |&(pos, _)| pos);

        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];
            if !self.table.is_terminator(ch) {
                i += 1;
                continue;
            }

            // Keep "?!", "..." and trailing closing quotes with the sentence
            let mut end = i + 1;
            while end < chars.len()
                && (self.table.is_terminator(chars[end].1) || is_closing(chars[end].1))
            {
                end += 1;
            }

            let at_break = end == chars.len() || chars[end].1.is_whitespace();
            let lone_dot = ch == '.' && !chars[i + 1..end].iter().any(|&(_, c)| c == '.');
            let before_dot = &line[start..pos];
            let suppressed = lone_dot
                && (self.ends_with_abbreviation(before_dot)
                    || is_initial(before_dot, &line[byte_at(end)..]));

            if at_break && !suppressed {
                let boundary = byte_at(end);
                push_trimmed(&line[start..boundary], sentences);
                start = boundary;
            }

            i = end;
        }

        push_trimmed(&line[start..], sentences);
    }

    fn ends_with_abbreviation(&self, before_dot: &str) -> bool {
        before_dot
            .split_whitespace()
            .last()
            .is_some_and(|token| self.table.is_abbreviation(trim_leading(token)))
    }
}

/// Whether the capital letter ending `before_dot` is one of a run of initials
///
/// A lone capital needs a neighbouring initial, as in `J. R. R. Tolkien`, so
/// `vitamin C. Vitamin C helps.` still splits. A single initial before a name
/// (`J. Smith`) therefore ends a sentence.
fn is_initial(before_dot: &str, after_dot: &str) -> bool {
    let mut before = before_dot.split_whitespace().rev();
    if !before
        .next()
        .is_some_and(|token| is_capital_letter(trim_leading(token)))
    {
        return false;
    }

    let dotted_capital =
        |token: &str| token.strip_suffix('.').is_some_and(|t| is_capital_letter(trim_leading(t)));

    before.next().is_some_and(dotted_capital)
        || after_dot.split_whitespace().next().is_some_and(dotted_capital)
}

fn is_capital_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

fn trim_leading(token: &str) -> &str {
    token.trim_start_matches(|c: char| !c.is_alphanumeric())
}

fn is_closing(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\'' | ')' | ']' | '}' | '\u{00BB}' | '\u{201D}' | '\u{2019}'
    )
}

fn push_trimmed(sentence: &str, sentences: &mut Vec<String>) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}
