//! Word tokenization

/// Characters stripped from both ends of every token
const PUNCTUATION: &[char] = &[
    '\u{2013}', '-', '(', ')', '_', '[', ']', '\'', '\u{2018}', '\u{2019}', '\u{201C}',
    '\u{201D}', '"', '.', '?', '!', ':', ';', ',', '\u{00BF}', '\u{00A1}', '\u{00AB}',
    '\u{00BB}', '\u{2039}', '\u{203A}', '\u{2014}', '\u{00D7}', '+', '&', '<', '>', '\u{2026}',
];

/// Split a sentence into words
///
/// Tokens are separated by whitespace and lose surrounding punctuation;
/// tokens made of punctuation only disappear. Symbols such as `#`, `/` or
/// `•` are kept so later filters can see them.
pub fn words(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|token| token.trim_matches(PUNCTUATION))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
