//! Candidate ranking over externally scored purchase options.

use super::catalog;
use super::state::Candidate;

/// A score is usable only when finite and strictly positive.
pub fn has_valid_score(c: &Candidate) -> bool {
    c.score.is_finite() && c.score > 0.0
}

/// Keep valid scores, sort ascending (lower payback first).
/// The sort is stable: equal scores keep their input order.
pub fn filter_and_sort(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut out: Vec<Candidate> = candidates
        .iter()
        .filter(|c| has_valid_score(c))
        .cloned()
        .collect();
    // `total_cmp` is safe here: NaN was filtered above.
    out.sort_by(|a, b| a.score.total_cmp(&b.score));
    out
}

/// Drop catalog-blocked upgrades, then [`filter_and_sort`].
pub fn rank(candidates: &[Candidate]) -> Vec<Candidate> {
    let allowed: Vec<Candidate> = candidates
        .iter()
        .filter(|c| !catalog::is_blocked(c))
        .cloned()
        .collect();
    filter_and_sort(&allowed)
}
