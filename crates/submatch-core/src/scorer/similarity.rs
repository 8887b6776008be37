use crate::normalize::normalize;

/// Insertion/deletion edit distance: the number of single-character inserts
/// and deletes turning `a` into `b`. A substitution therefore costs 2.
///
/// Computed as `len(a) + len(b) - 2 * lcs(a, b)` with a two-row DP table.
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Keep the shorter string in the inner loop
    let (outer, inner) = if a_chars.len() >= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];

    for &oc in outer.iter() {
        for (j, &ic) in inner.iter().enumerate() {
            curr[j + 1] = if oc == ic {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let lcs = prev[inner.len()];
    outer.len() + inner.len() - 2 * lcs
}

/// Similarity of two names in `[0, 1]`: `1 - d / (len(a) + len(b))` over
/// the normalized stems, where `d` is [`indel_distance`].
///
/// Two empty stems are identical and score 1.0.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }

    1.0 - indel_distance(&a, &b) as f64 / total as f64
}
