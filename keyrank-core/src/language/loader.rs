//! Language table loader
//!
//! Embedded tables are parsed once on first access and shared for the life
//! of the process.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::language::runtime::LanguageRules;

/// Language used when a code has no table of its own
pub const DEFAULT_LANGUAGE: &str = "en";

const EMBEDDED_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../../configs/languages/english.toml")),
    ("de", include_str!("../../configs/languages/german.toml")),
    ("nl", include_str!("../../configs/languages/dutch.toml")),
    ("fr", include_str!("../../configs/languages/french.toml")),
    ("es", include_str!("../../configs/languages/spanish.toml")),
    ("it", include_str!("../../configs/languages/italian.toml")),
];

/// Embedded language tables
static EMBEDDED: OnceLock<HashMap<String, Arc<LanguageRules>>> = OnceLock::new();

fn embedded() -> &'static HashMap<String, Arc<LanguageRules>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for (code, source) in EMBEDDED_SOURCES {
            match LanguageRules::from_toml_str(source, code) {
                Ok(rules) => {
                    map.insert((*code).to_string(), Arc::new(rules));
                }
                Err(e) => {
                    log::warn!("Failed to load embedded language table '{code}': {e}");
                }
            }
        }

        map
    })
}

/// Reduce a locale such as `en_US` or `pt-BR` to its language code
pub fn language_from_locale(locale: &str) -> String {
    locale
        .trim()
        .split(['_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Load language rules by language or locale code
///
/// Unsupported codes fall back to [`DEFAULT_LANGUAGE`].
pub fn get_rules(code: &str) -> Arc<LanguageRules> {
    let tables = embedded();
    let language = language_from_locale(code);

    if let Some(rules) = tables.get(&language) {
        return Arc::clone(rules);
    }

    log::debug!("No function-word table for '{code}', falling back to '{DEFAULT_LANGUAGE}'");

    tables
        .get(DEFAULT_LANGUAGE)
        .cloned()
        .unwrap_or_else(|| Arc::new(LanguageRules::fallback()))
}

/// Check whether a language or locale code has its own table
pub fn is_supported(code: &str) -> bool {
    embedded().contains_key(&language_from_locale(code))
}

/// Embedded languages as `(code, name)` pairs, sorted by code
pub fn supported_languages() -> Vec<(String, String)> {
    let mut languages: Vec<(String, String)> = embedded()
        .values()
        .map(|rules| (rules.code().to_string(), rules.name().to_string()))
        .collect();
    languages.sort();
    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_embedded_table_parses() {
        for (code, source) in EMBEDDED_SOURCES {
            let rules = LanguageRules::from_toml_str(source, code).unwrap();
            assert_eq!(rules.code(), *code);
            assert!(!rules.function_words().all().is_empty());
        }
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(language_from_locale("en_US"), "en");
        assert_eq!(language_from_locale("pt-BR"), "pt");
        assert_eq!(language_from_locale("DE"), "de");
        assert_eq!(language_from_locale("nl"), "nl");
        assert_eq!(language_from_locale(""), "");
    }

    #[test]
    fn test_get_rules_by_locale() {
        assert_eq!(get_rules("de_DE").code(), "de");
        assert_eq!(get_rules("fr-CA").code(), "fr");
        assert_eq!(get_rules("EN").code(), "en");
    }

    #[test]
    fn test_unsupported_language_falls_back_to_english() {
        let rules = get_rules("xx_YY");
        assert_eq!(rules.code(), DEFAULT_LANGUAGE);
        assert!(rules.function_words().is_function_word("the"));

        let empty = get_rules("");
        assert_eq!(empty.code(), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_tables_are_shared() {
        let first = get_rules("en");
        let second = get_rules("en_GB");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_supported_languages() {
        let languages = supported_languages();
        let codes: Vec<&str> = languages.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(codes, vec!["de", "en", "es", "fr", "it", "nl"]);
        assert!(is_supported("es_MX"));
        assert!(!is_supported("ja"));
    }
}
