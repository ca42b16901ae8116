//! Relevance filters
//!
//! Every filter is a pure function from a candidate list to the candidates
//! it keeps. [`filter_combinations`] runs the structural filters in their
//! fixed order; the relevance and density filters are applied separately by
//! the extractor because they depend on injected relevance and word count.

use crate::candidate::Candidate;
use crate::language::{FunctionWords, WordSet};

/// Tokens that never belong in a keyphrase
pub const SPECIAL_CHARACTERS: &[&str] = &[
    "\u{2013}", "\u{2014}", "-", "\u{00A9}", "#", "%", "/", "\\", "$", "\u{20AC}", "\u{00A3}",
    "*", "\u{2022}", "|", "\u{2192}", "\u{2190}", "}", "{", "//", "||", "\u{200B}",
];

/// Drop single-word candidates of at most one character
pub fn filter_one_character_words(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.retain(|candidate| {
        !(candidate.len() == 1 && candidate.words()[0].chars().count() <= 1)
    });
    candidates
}

/// Drop candidates containing a special-character token
pub fn filter_special_characters(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.retain(|candidate| {
        !candidate
            .words()
            .iter()
            .any(|word| SPECIAL_CHARACTERS.contains(&word.as_str()))
    });
    candidates
}

/// Drop candidates containing any of the given words
pub fn filter_function_words_anywhere(
    mut candidates: Vec<Candidate>,
    function_words: &WordSet,
) -> Vec<Candidate> {
    candidates.retain(|candidate| {
        !candidate
            .words()
            .iter()
            .any(|word| function_words.contains(word))
    });
    candidates
}

/// Drop candidates whose first word is one of the given words
pub fn filter_function_words_at_beginning(
    mut candidates: Vec<Candidate>,
    function_words: &WordSet,
) -> Vec<Candidate> {
    candidates.retain(|candidate| {
        !candidate
            .first_word()
            .is_some_and(|word| function_words.contains(word))
    });
    candidates
}

/// Drop candidates whose last word is one of the given words
pub fn filter_function_words_at_ending(
    mut candidates: Vec<Candidate>,
    function_words: &WordSet,
) -> Vec<Candidate> {
    candidates.retain(|candidate| {
        !candidate
            .last_word()
            .is_some_and(|word| function_words.contains(word))
    });
    candidates
}

/// Drop candidates that open or close with one of the given words
pub fn filter_function_words_at_beginning_and_ending(
    candidates: Vec<Candidate>,
    function_words: &WordSet,
) -> Vec<Candidate> {
    let candidates = filter_function_words_at_beginning(candidates, function_words);
    filter_function_words_at_ending(candidates, function_words)
}

/// Keep candidates seen more than once with non-zero relevance
pub fn filter_relevant(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.retain(|candidate| candidate.occurrences() != 1 && candidate.relevance() != 0.0);
    candidates
}

/// Keep candidates whose density lies in `[lower_limit, upper_limit)`
pub fn filter_on_density(
    mut candidates: Vec<Candidate>,
    word_count: usize,
    lower_limit: f64,
    upper_limit: f64,
) -> Vec<Candidate> {
    candidates.retain(|candidate| {
        let density = candidate.density(word_count);
        density >= lower_limit && density < upper_limit
    });
    candidates
}

/// One structural filter stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStage {
    OneCharacterWords,
    SpecialCharacters,
    FunctionWordsAnywhere,
    FunctionWordsAtBeginningAndEnding,
    FunctionWordsAtEnding,
    FunctionWordsAtBeginning,
}

impl FilterStage {
    /// Stages in the order they are applied
    pub const PIPELINE: [FilterStage; 6] = [
        FilterStage::OneCharacterWords,
        FilterStage::SpecialCharacters,
        FilterStage::FunctionWordsAnywhere,
        FilterStage::FunctionWordsAtBeginningAndEnding,
        FilterStage::FunctionWordsAtEnding,
        FilterStage::FunctionWordsAtBeginning,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FilterStage::OneCharacterWords => "one-character words",
            FilterStage::SpecialCharacters => "special characters",
            FilterStage::FunctionWordsAnywhere => "function words anywhere",
            FilterStage::FunctionWordsAtBeginningAndEnding => {
                "function words at beginning and ending"
            }
            FilterStage::FunctionWordsAtEnding => "function words at ending",
            FilterStage::FunctionWordsAtBeginning => "function words at beginning",
        }
    }

    pub fn apply(self, candidates: Vec<Candidate>, function_words: &FunctionWords) -> Vec<Candidate> {
        match self {
            FilterStage::OneCharacterWords => filter_one_character_words(candidates),
            FilterStage::SpecialCharacters => filter_special_characters(candidates),
            FilterStage::FunctionWordsAnywhere => {
                filter_function_words_anywhere(candidates, function_words.filtered_anywhere())
            }
            FilterStage::FunctionWordsAtBeginningAndEnding => {
                filter_function_words_at_beginning_and_ending(
                    candidates,
                    function_words.filtered_at_beginning_and_ending(),
                )
            }
            FilterStage::FunctionWordsAtEnding => {
                filter_function_words_at_ending(candidates, function_words.filtered_at_ending())
            }
            FilterStage::FunctionWordsAtBeginning => {
                filter_function_words_at_beginning(candidates, function_words.filtered_at_beginning())
            }
        }
    }
}

/// Run every structural filter stage in order
pub fn filter_combinations(
    candidates: Vec<Candidate>,
    function_words: &FunctionWords,
) -> Vec<Candidate> {
    FilterStage::PIPELINE
        .iter()
        .fold(candidates, |candidates, stage| {
            let before = candidates.len();
            let kept = stage.apply(candidates, function_words);
            log::debug!("{}: kept {} of {} candidates", stage.name(), kept.len(), before);
            kept
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::FunctionWordLists;

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn candidate(words: &[&str], occurrences: usize) -> Candidate {
        let mut candidate = Candidate::new(words.iter().map(|w| w.to_string()), &set(&["the"]));
        for _ in 0..occurrences {
            candidate.increment_occurrences();
        }
        candidate
    }

    fn combinations(candidates: &[Candidate]) -> Vec<String> {
        candidates.iter().map(Candidate::combination).collect()
    }

    #[test]
    fn test_one_character_filter() {
        let kept = filter_one_character_words(vec![
            candidate(&["x"], 5),
            candidate(&["é"], 5),
            candidate(&["ab"], 5),
            candidate(&["x", "y"], 5),
        ]);
        assert_eq!(combinations(&kept), vec!["ab", "x y"]);
    }

    #[test]
    fn test_special_character_filter() {
        let kept = filter_special_characters(vec![
            candidate(&["seo", "#"], 2),
            candidate(&["//"], 2),
            candidate(&["\u{200B}", "tips"], 2),
            candidate(&["c#", "tips"], 2),
            candidate(&["plain", "words"], 2),
        ]);
        assert_eq!(combinations(&kept), vec!["c# tips", "plain words"]);
    }

    #[test]
    fn test_function_words_anywhere() {
        let kept = filter_function_words_anywhere(
            vec![
                candidate(&["cat", "is", "here"], 2),
                candidate(&["cat", "sat"], 2),
            ],
            &set(&["is"]),
        );
        assert_eq!(combinations(&kept), vec!["cat sat"]);
    }

    #[test]
    fn test_function_words_at_beginning_and_ending() {
        let kept = filter_function_words_at_beginning_and_ending(
            vec![
                candidate(&["the", "cat"], 2),
                candidate(&["cat", "sat"], 2),
                candidate(&["sat", "on"], 2),
                candidate(&["sat", "on", "the", "mat"], 2),
            ],
            &set(&["the", "on"]),
        );
        assert_eq!(combinations(&kept), vec!["cat sat", "sat on the mat"]);
    }

    #[test]
    fn test_function_words_at_ending_only() {
        let kept = filter_function_words_at_ending(
            vec![candidate(&["first", "step"], 2), candidate(&["step", "first"], 2)],
            &set(&["first"]),
        );
        assert_eq!(combinations(&kept), vec!["first step"]);
    }

    #[test]
    fn test_function_words_at_beginning_only() {
        let kept = filter_function_words_at_beginning(
            vec![candidate(&["new", "phone"], 2), candidate(&["phone", "new"], 2)],
            &set(&["new"]),
        );
        assert_eq!(combinations(&kept), vec!["phone new"]);
    }

    #[test]
    fn test_relevance_filter() {
        let kept = filter_relevant(vec![
            candidate(&["cat"], 1),
            candidate(&["cat"], 2),
            candidate(&["the"], 9),
            candidate(&["cat", "sat"], 2),
        ]);
        assert_eq!(combinations(&kept), vec!["cat"]);
        assert_eq!(kept[0].occurrences(), 2);
    }

    #[test]
    fn test_density_filter_bounds() {
        let kept = filter_on_density(
            vec![candidate(&["rare"], 2), candidate(&["edge"], 6), candidate(&["common"], 9)],
            200,
            0.0,
            0.03,
        );
        // 6 / 200 is exactly the upper limit and is excluded
        assert_eq!(combinations(&kept), vec!["rare"]);
    }

    #[test]
    fn test_filters_accept_empty_input() {
        let fw = FunctionWords::default();
        assert!(filter_combinations(Vec::new(), &fw).is_empty());
        assert!(filter_relevant(Vec::new()).is_empty());
        assert!(filter_on_density(Vec::new(), 500, 0.0, 0.03).is_empty());
    }

    #[test]
    fn test_pipeline_order() {
        assert_eq!(FilterStage::PIPELINE[0], FilterStage::OneCharacterWords);
        assert_eq!(FilterStage::PIPELINE[5], FilterStage::FunctionWordsAtBeginning);
    }

    #[test]
    fn test_filter_combinations_uses_each_list() {
        let fw = FunctionWords::from_lists(&FunctionWordLists {
            filtered_anywhere: vec!["is".into()],
            filtered_at_beginning: vec!["new".into()],
            filtered_at_ending: vec!["first".into()],
            filtered_at_beginning_and_ending: vec!["the".into()],
            other: vec![],
        });

        let kept = filter_combinations(
            vec![
                candidate(&["a"], 2),
                candidate(&["cat", "#"], 2),
                candidate(&["cat", "is", "fed"], 2),
                candidate(&["the", "cat"], 2),
                candidate(&["cat", "first"], 2),
                candidate(&["new", "cat"], 2),
                candidate(&["cat", "new"], 2),
                candidate(&["first", "cat"], 2),
                candidate(&["cat"], 2),
            ],
            &fw,
        );
        assert_eq!(combinations(&kept), vec!["cat new", "first cat", "cat"]);
    }
}
