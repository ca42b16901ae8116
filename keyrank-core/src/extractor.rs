//! Keyphrase extraction orchestrator

use std::sync::Arc;
use std::time::Instant;

use crate::aggregate::count_occurrences;
use crate::candidate::Candidate;
use crate::config::{defaults, Config};
use crate::error::Result;
use crate::filter::{filter_combinations, filter_on_density, filter_relevant};
use crate::generator::{combinations_from_sentences, prepare_sentences};
use crate::language::{get_rules, LanguageRules};
use crate::output::{Extraction, ExtractionMetadata, Keyphrase};
use crate::rank::{rank, sort_candidates};
use crate::relevance::RelevanceMap;

/// Extracts ranked keyphrases from text
///
/// An extractor is immutable once built and can be shared across threads.
#[derive(Debug, Clone)]
pub struct KeyphraseExtractor {
    config: Config,
    rules: Arc<LanguageRules>,
}

impl KeyphraseExtractor {
    /// Create an extractor with default configuration (English)
    pub fn new() -> Self {
        let config = Config::default();
        let rules = get_rules(&config.language);
        Self { config, rules }
    }

    /// Create an extractor for a language or locale code
    ///
    /// Unsupported codes fall back to English.
    pub fn with_language(code: &str) -> Self {
        let config = Config {
            language: code.to_string(),
            ..Config::default()
        };
        let rules = get_rules(code);
        Self { config, rules }
    }

    /// Create an extractor from a validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let rules = get_rules(&config.language);
        Self::with_rules(config, rules)
    }

    /// Create an extractor with externally loaded language rules
    ///
    /// `config.language` is ignored in favour of `rules`.
    pub fn with_rules(config: Config, rules: Arc<LanguageRules>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rules })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rules(&self) -> &LanguageRules {
        &self.rules
    }

    /// Extract keyphrases from one document, highest relevance first
    pub fn extract(&self, text: &str) -> Extraction {
        let start = Instant::now();
        let function_words = self.rules.function_words();
        let all_function_words = function_words.all();

        let sentences = prepare_sentences(text, &self.rules);

        // Single words decide the relevance map
        let single_words =
            count_occurrences(combinations_from_sentences(&sentences, 1, all_function_words));
        let word_count: usize = single_words.iter().map(Candidate::occurrences).sum();
        let single_words = rank(filter_relevant(single_words), defaults::SINGLE_WORD_LIMIT);

        let relevance_map = RelevanceMap::from_candidates(&single_words);
        log::trace!("relevance map holds {} words", relevance_map.len());

        let mut candidates = single_words;
        for window in 2..=self.config.max_phrase_length {
            candidates.extend(count_occurrences(combinations_from_sentences(
                &sentences,
                window,
                all_function_words,
            )));
        }
        let candidates_considered = candidates.len();

        let mut candidates = filter_combinations(candidates, function_words);
        relevance_map.inject(&mut candidates);

        let mut candidates = filter_relevant(candidates);
        sort_candidates(&mut candidates);

        if word_count >= self.config.word_count_lower_limit {
            candidates = filter_on_density(
                candidates,
                word_count,
                self.config.density_lower_limit,
                self.config.density_upper_limit,
            );
        }
        candidates.truncate(self.config.result_limit);

        log::debug!(
            "{}: {} words in {} sentences, {} candidates considered, {} kept",
            self.rules.code(),
            word_count,
            sentences.len(),
            candidates_considered,
            candidates.len()
        );

        let keyphrases = candidates
            .iter()
            .map(|candidate| Keyphrase::from_candidate(candidate, word_count))
            .collect();

        Extraction {
            keyphrases,
            metadata: ExtractionMetadata {
                language: self.rules.code().to_string(),
                word_count,
                sentence_count: sentences.len(),
                candidates_considered,
                processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            },
        }
    }

    /// Extract keyphrases from several documents
    ///
    /// Results are in input order. Documents run in parallel when the
    /// `parallel` feature is enabled.
    pub fn extract_batch(&self, texts: &[&str]) -> Vec<Extraction> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            texts.par_iter().map(|text| self.extract(text)).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            texts.iter().map(|text| self.extract(text)).collect()
        }
    }
}

impl Default for KeyphraseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract keyphrases with default settings for the given locale
pub fn relevant_words(text: &str, locale: &str) -> Vec<Keyphrase> {
    KeyphraseExtractor::with_language(locale)
        .extract(text)
        .keyphrases
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT_TEXT: &str = "the cat sat on the mat. the cat sat on the mat.";

    fn combinations(extraction: &Extraction) -> Vec<&str> {
        extraction
            .keyphrases
            .iter()
            .map(|k| k.combination.as_str())
            .collect()
    }

    #[test]
    fn test_empty_text() {
        let extraction = KeyphraseExtractor::new().extract("");
        assert!(extraction.is_empty());
        assert_eq!(extraction.metadata.word_count, 0);
        assert_eq!(extraction.metadata.sentence_count, 0);
    }

    #[test]
    fn test_single_word() {
        assert!(KeyphraseExtractor::new().extract("keyword").is_empty());
    }

    #[test]
    fn test_cat_example_ranking() {
        let extraction = KeyphraseExtractor::new().extract(CAT_TEXT);

        assert_eq!(
            combinations(&extraction),
            vec!["cat sat on the mat", "sat on the mat", "cat sat", "cat", "sat", "mat"]
        );

        let top = &extraction.keyphrases[0];
        assert!((top.relevance - 18.0 * 0.6 * 2.0).abs() < 1e-9);
        assert_eq!(top.occurrences, 2);
        assert_eq!(top.length, 5);
        assert_eq!(extraction.keyphrases[1].relevance, 12.0);
        assert_eq!(extraction.keyphrases[2].relevance, 6.0);
        assert_eq!(extraction.keyphrases[3].relevance, 2.0);
    }

    #[test]
    fn test_function_word_boundaries_removed() {
        let extraction = KeyphraseExtractor::new().extract(CAT_TEXT);
        assert!(extraction.get("the cat").is_none());
        assert!(extraction.get("the").is_none());
        assert!(extraction.get("on the mat").is_none());
    }

    #[test]
    fn test_metadata() {
        let extraction = KeyphraseExtractor::new().extract(CAT_TEXT);
        assert_eq!(extraction.metadata.language, "en");
        assert_eq!(extraction.metadata.word_count, 12);
        assert_eq!(extraction.metadata.sentence_count, 2);
        assert!(extraction.metadata.candidates_considered > extraction.len());
        assert!(extraction.metadata.processing_time_ms >= 0.0);
    }

    #[test]
    fn test_density_reported() {
        let extraction = KeyphraseExtractor::new().extract(CAT_TEXT);
        let cat = extraction.get("cat").unwrap();
        assert_eq!(cat.density, 2.0 / 12.0);
    }

    #[test]
    fn test_result_limit() {
        let config = Config::builder().result_limit(2).build().unwrap();
        let extraction = KeyphraseExtractor::with_config(config)
            .unwrap()
            .extract(CAT_TEXT);
        assert_eq!(
            combinations(&extraction),
            vec!["cat sat on the mat", "sat on the mat"]
        );
    }

    #[test]
    fn test_result_limit_does_not_change_relevance() {
        let full = KeyphraseExtractor::new().extract(CAT_TEXT);
        let config = Config::builder().result_limit(1).build().unwrap();
        let limited = KeyphraseExtractor::with_config(config)
            .unwrap()
            .extract(CAT_TEXT);

        assert_eq!(limited.len(), 1);
        assert_eq!(limited.keyphrases[0].combination, full.keyphrases[0].combination);
        assert_eq!(limited.keyphrases[0].relevance, full.keyphrases[0].relevance);
    }

    /// "zeta" plus 99 fillers tie at three occurrences ahead of "yotta"
    fn crowded_text() -> String {
        let mut text = String::from("zeta.\n");
        for i in 0..99u8 {
            let filler = format!("filler{}{}", (b'a' + i / 26) as char, (b'a' + i % 26) as char);
            for _ in 0..3 {
                text.push_str(&filler);
                text.push_str(".\n");
            }
        }
        text.push_str("zeta yotta.\nzeta yotta.\nyotta.\n");
        text
    }

    #[test]
    fn test_relevance_map_keeps_top_hundred_single_words() {
        let text = crowded_text();

        for limit in [100, 5] {
            let config = Config::builder().result_limit(limit).build().unwrap();
            let extraction = KeyphraseExtractor::with_config(config)
                .unwrap()
                .extract(&text);

            assert_eq!(extraction.metadata.word_count, 303);

            // "yotta" is the 101st single word, so only "zeta" counts
            let top = &extraction.keyphrases[0];
            assert_eq!(top.combination, "zeta yotta");
            assert_eq!(top.relevance, 3.0 * 0.5 * 2.0);
            assert!(extraction.get("yotta").is_none());
        }

        let extraction = KeyphraseExtractor::new().extract(&text);
        assert_eq!(extraction.len(), defaults::RESULT_LIMIT);
        assert!(extraction.get("zeta").is_some());
        assert!(extraction.get("fillerdt").is_some());
        assert!(extraction.get("fillerdu").is_none());
    }

    #[test]
    fn test_max_phrase_length() {
        let config = Config::builder().max_phrase_length(2).build().unwrap();
        let extraction = KeyphraseExtractor::with_config(config)
            .unwrap()
            .extract(CAT_TEXT);
        assert!(extraction.keyphrases.iter().all(|k| k.length <= 2));
        assert_eq!(combinations(&extraction), vec!["cat sat", "cat", "sat", "mat"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            result_limit: 0,
            ..Config::default()
        };
        assert!(KeyphraseExtractor::with_config(config).is_err());
    }

    #[test]
    fn test_unsupported_language_falls_back() {
        let extractor = KeyphraseExtractor::with_language("xx_YY");
        assert_eq!(extractor.rules().code(), "en");
        assert_eq!(extractor.config().language, "xx_YY");
        assert_eq!(extractor.extract(CAT_TEXT).metadata.language, "en");
    }

    #[test]
    fn test_locale_is_resolved() {
        let extractor = KeyphraseExtractor::with_language("de_DE");
        assert_eq!(extractor.rules().code(), "de");
    }

    #[test]
    fn test_batch_keeps_order() {
        let extractor = KeyphraseExtractor::new();
        let results = extractor.extract_batch(&[CAT_TEXT, "", "seo tips. seo tips."]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].keyphrases[0].combination, "cat sat on the mat");
        assert!(results[1].is_empty());
        assert_eq!(results[2].keyphrases[0].combination, "seo tips");
    }

    #[test]
    fn test_relevant_words_helper() {
        let keyphrases = relevant_words(CAT_TEXT, "en_US");
        assert_eq!(keyphrases[0].combination, "cat sat on the mat");
    }
}
