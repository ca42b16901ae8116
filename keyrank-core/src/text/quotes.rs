//! Quote-character normalization

/// Replace typographic single and double quotes with their ASCII forms
pub fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '`' | '\u{2039}' | '\u{203A}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{301D}' | '\u{301E}' | '\u{301F}' | '\u{201F}'
            | '\u{201E}' | '\u{00AB}' | '\u{00BB}' => '"',
            other => other,
        })
        .collect()
}
