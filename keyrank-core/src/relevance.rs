//! Single-word relevance map
//!
//! Built once per extraction from the top-ranked single words and then only
//! read, to score multi-word candidates.

use std::collections::HashMap;

use crate::candidate::Candidate;

/// Maps a relevant single word to its relevance score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelevanceMap {
    scores: HashMap<String, f64>,
}

impl RelevanceMap {
    /// Build from ranked single-word candidates
    ///
    /// Candidates longer than one word are ignored.
    pub fn from_candidates(candidates: &[Candidate]) -> Self {
        candidates
            .iter()
            .filter(|candidate| candidate.len() == 1)
            .map(|candidate| (candidate.combination(), candidate.relevance()))
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.scores.contains_key(word)
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Let every candidate score itself against this map
    pub fn inject(&self, candidates: &mut [Candidate]) {
        for candidate in candidates.iter_mut() {
            candidate.set_relevant_words(self);
        }
    }
}

impl FromIterator<(String, f64)> for RelevanceMap {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::WordSet;

    fn candidate(words: &[&str], occurrences: usize) -> Candidate {
        let mut candidate = Candidate::new(words.iter().map(|w| w.to_string()), &WordSet::new());
        for _ in 0..occurrences {
            candidate.increment_occurrences();
        }
        candidate
    }

    #[test]
    fn test_from_candidates_keeps_single_words() {
        let candidates = vec![
            candidate(&["search"], 4),
            candidate(&["engine"], 3),
            candidate(&["search", "engine"], 3),
        ];
        let map = RelevanceMap::from_candidates(&candidates);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("search"), Some(4.0));
        assert_eq!(map.get("engine"), Some(3.0));
        assert!(!map.contains("search engine"));
    }

    #[test]
    fn test_empty_map() {
        let map = RelevanceMap::from_candidates(&[]);
        assert!(map.is_empty());
        assert_eq!(map.get("anything"), None);
    }

    #[test]
    fn test_inject_updates_multi_word_relevance() {
        let map = RelevanceMap::from_candidates(&[candidate(&["search"], 2)]);
        let mut candidates = vec![candidate(&["search", "tips"], 2), candidate(&["search"], 2)];

        assert_eq!(candidates[0].relevance(), 0.0);
        map.inject(&mut candidates);

        assert_eq!(candidates[0].relevance(), 3.0 * 0.5 * 2.0);
        assert_eq!(candidates[1].relevance(), 2.0);
    }
}
