use crate::result::MatchedPair;
use crate::scorer::Scorer;
use ahash::AHashSet;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Greedy-global assignment.
///
/// 1. Score every pair of the Cartesian product `a x b`
/// 2. Order by score descending, ties by position in the product
/// 3. Walk once, skipping pairs whose items are already taken
/// 4. Stop at the first free pair below `limit`: every later pair scores
///    no higher
pub(super) fn assign<S: Scorer>(
    items_a: &[String],
    items_b: &[String],
    scorer: &S,
    limit: f64,
) -> Vec<MatchedPair> {
    let mut candidates: Vec<(usize, usize, f64)> = Vec::with_capacity(items_a.len() * items_b.len());
    for (i, a) in items_a.iter().enumerate() {
        for (j, b) in items_b.iter().enumerate() {
            candidates.push((i, j, scorer.score(a, b)));
        }
    }

    candidates.sort_by(|x, y| by_score_then_position(x, y));

    let mut taken_a: AHashSet<&str> = AHashSet::new();
    let mut taken_b: AHashSet<&str> = AHashSet::new();
    let mut pairs = Vec::new();

    for (i, j, score) in candidates {
        let (a, b) = (items_a[i].as_str(), items_b[j].as_str());
        if taken_a.contains(a) || taken_b.contains(b) {
            continue;
        }

        if score < limit {
            debug!(
                "Stopping at {} / {} ({:.3} < limit {:.3})",
                a, b, score, limit
            );
            break;
        }

        trace!("Accepted {} -> {} ({:.3})", a, b, score);
        taken_a.insert(a);
        taken_b.insert(b);
        pairs.push(MatchedPair {
            a: a.to_string(),
            b: b.to_string(),
            score,
        });
    }

    pairs
}

fn by_score_then_position(x: &(usize, usize, f64), y: &(usize, usize, f64)) -> Ordering {
    y.2.total_cmp(&x.2)
        .then_with(|| (x.0, x.1).cmp(&(y.0, y.1)))
}
