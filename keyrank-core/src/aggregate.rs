//! Occurrence aggregation
//!
//! Collapses duplicate candidates into one representative per distinct word
//! sequence. The first sighting already counts as one occurrence.

use std::collections::HashMap;

use crate::candidate::Candidate;

/// Deduplicate candidates by their exact word sequence, counting occurrences
///
/// The result keeps first-seen order.
pub fn count_occurrences<I>(candidates: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Candidate> = Vec::new();

    for candidate in candidates {
        let key = candidate.combination();
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                index.insert(key, unique.len());
                unique.push(candidate);
                unique.len() - 1
            }
        };
        unique[slot].increment_occurrences();
    }

    unique
}
