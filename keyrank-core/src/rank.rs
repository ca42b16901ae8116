//! Candidate ranking

use std::cmp::Ordering;

use crate::candidate::Candidate;

/// Highest relevance first, then longest phrase first
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.relevance()
        .total_cmp(&a.relevance())
        .then_with(|| b.len().cmp(&a.len()))
}

/// Sort in place; remaining ties keep their current order
pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(compare_candidates);
}

/// Sort and keep the first `limit` candidates
pub fn rank(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    sort_candidates(&mut candidates);
    candidates.truncate(limit);
    candidates
}
