//! Pairwise scoring over feature sets.

use kizuna_core::types::collections::FxHashSet;
use kizuna_core::types::Token;

use crate::weight::WeightModel;

/// Score and shared tokens for one unordered pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairScore {
    /// Sum of per-token weights over the intersection.
    pub score: f64,
    /// Display-sorted labels of the shared tokens.
    pub common: Vec<String>,
}

impl PairScore {
    pub fn common_count(&self) -> usize {
        self.common.len()
    }
}

/// Score two feature sets: weight sum over the intersection plus the
/// display-sorted common labels.
///
/// Symmetric: swapping the inputs changes nothing observable.
pub fn score_pair(
    a: &FxHashSet<Token>,
    b: &FxHashSet<Token>,
    model: &WeightModel,
) -> PairScore {
    // Iterate the smaller set; membership tests hit the larger one.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut shared: Vec<(String, f64)> = small
        .iter()
        .filter(|token| large.contains(*token))
        .map(|token| (token.display_label(), model.weight(token)))
        .collect();
    // Fixed summation order; the fold does not depend on which set was
    // iterated.
    shared.sort_by(|x, y| x.0.cmp(&y.0).then(x.1.total_cmp(&y.1)));

    let score = shared.iter().map(|(_, weight)| weight).sum();
    let common = shared.into_iter().map(|(label, _)| label).collect();

    PairScore { score, common }
}
