use crate::result::MatchedPair;
use crate::scorer::Scorer;
use ahash::AHashSet;
use tracing::{debug, trace};

/// Exhaustive search over orderings of `a`.
///
/// For each ordering (lexicographic over input positions), every item of `a`
/// in turn takes the best still-free item of `b` scoring at least `limit`,
/// earliest position winning ties. The ordering with the highest summed
/// score is kept; on equal totals the first one found wins.
///
/// A repeated name takes part once, at its first position.
///
/// Cost is `|a|! * |a| * |b|`, so the caller bounds `|a|`.
pub(super) fn assign<S: Scorer>(
    items_a: &[String],
    items_b: &[String],
    scorer: &S,
    limit: f64,
) -> Vec<MatchedPair> {
    let items_a = distinct(items_a);
    let items_b = distinct(items_b);

    let scores: Vec<Vec<f64>> = items_a
        .iter()
        .map(|a| items_b.iter().map(|b| scorer.score(a, b)).collect())
        .collect();

    let mut order: Vec<usize> = (0..items_a.len()).collect();
    let mut best: Option<(f64, Vec<(usize, usize)>)> = None;
    let mut explored = 0usize;

    loop {
        explored += 1;
        let (total, picks) = assign_in_order(&order, &scores, limit);
        let improves = match &best {
            Some((best_total, _)) => total > *best_total,
            None => true,
        };
        if improves {
            trace!("Ordering {:?} improves total to {:.3}", order, total);
            best = Some((total, picks));
        }

        if !next_permutation(&mut order) {
            break;
        }
    }

    debug!("Explored {} orderings of {} items", explored, items_a.len());

    best.map(|(_, picks)| {
        picks
            .into_iter()
            .map(|(i, j)| MatchedPair {
                a: items_a[i].to_string(),
                b: items_b[j].to_string(),
                score: scores[i][j],
            })
            .collect()
    })
    .unwrap_or_default()
}

fn distinct(items: &[String]) -> Vec<&String> {
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut kept = Vec::new();
    for item in items {
        if seen.insert(item.as_str()) {
            kept.push(item);
        }
    }
    kept
}

fn assign_in_order(order: &[usize], scores: &[Vec<f64>], limit: f64) -> (f64, Vec<(usize, usize)>) {
    let width = scores.first().map(|row| row.len()).unwrap_or(0);
    let mut free = vec![true; width];
    let mut total = 0.0;
    let mut picks = Vec::new();

    for &i in order {
        let mut pick: Option<(usize, f64)> = None;
        for (j, &score) in scores[i].iter().enumerate() {
            if !free[j] || score < limit {
                continue;
            }
            if pick.map_or(true, |(_, best)| score > best) {
                pick = Some((j, score));
            }
        }

        if let Some((j, score)) = pick {
            free[j] = false;
            total += score;
            picks.push((i, j));
        }
    }

    (total, picks)
}

/// Advance `items` to the next lexicographic permutation. Returns `false`
/// once the last permutation has been passed.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let Some(pivot) = (0..items.len() - 1).rev().find(|&i| items[i] < items[i + 1]) else {
        return false;
    };

    // Rightmost element greater than the pivot always exists past it
    let swap_with = (pivot + 1..items.len())
        .rev()
        .find(|&j| items[j] > items[pivot])
        .unwrap_or(pivot + 1);

    items.swap(pivot, swap_with);
    items[pivot + 1..].reverse();
    true
}
