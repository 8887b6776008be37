use crate::result::MatchedPair;
use crate::scorer::Scorer;
use ahash::AHashSet;

/// Positional pairing: the i-th item of `a` with the i-th item of `b`.
///
/// Scores are only recorded for reporting. A repeated name is paired once,
/// at its first position.
pub(super) fn assign<S: Scorer>(items_a: &[String], items_b: &[String], scorer: &S) -> Vec<MatchedPair> {
    let mut taken_a: AHashSet<&str> = AHashSet::new();
    let mut taken_b: AHashSet<&str> = AHashSet::new();

    items_a
        .iter()
        .zip(items_b.iter())
        .filter(|&(a, b)| {
            !taken_a.contains(a.as_str())
                && !taken_b.contains(b.as_str())
                && taken_a.insert(a.as_str())
                && taken_b.insert(b.as_str())
        })
        .map(|(a, b)| MatchedPair {
            a: a.clone(),
            b: b.clone(),
            score: scorer.score(a, b),
        })
        .collect()
}
