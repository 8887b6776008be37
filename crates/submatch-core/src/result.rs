use ahash::AHashSet;

/// One accepted pairing between an item of the first collection (`a`) and
/// one of the second (`b`), with the score it was accepted at.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPair {
    pub a: String,
    pub b: String,
    pub score: f64,
}

/// Outcome of a matching run.
///
/// `pairs` keeps the order in which pairs were accepted. The unmatched lists
/// are exactly the input items absent from the mapping, in input order and
/// without repeats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult {
    pairs: Vec<MatchedPair>,
    unmatched_a: Vec<String>,
    unmatched_b: Vec<String>,
}

impl MatchResult {
    pub(crate) fn assemble(items_a: &[String], items_b: &[String], pairs: Vec<MatchedPair>) -> Self {
        let domain: AHashSet<&str> = pairs.iter().map(|p| p.a.as_str()).collect();
        let range: AHashSet<&str> = pairs.iter().map(|p| p.b.as_str()).collect();

        let unmatched_a = remaining(items_a, &domain);
        let unmatched_b = remaining(items_b, &range);

        Self {
            pairs,
            unmatched_a,
            unmatched_b,
        }
    }

    pub fn pairs(&self) -> &[MatchedPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn unmatched_a(&self) -> &[String] {
        &self.unmatched_a
    }

    pub fn unmatched_b(&self) -> &[String] {
        &self.unmatched_b
    }

    /// Item of the second collection paired with `a`, if any.
    pub fn partner_of(&self, a: &str) -> Option<&str> {
        self.pairs.iter().find(|p| p.a == a).map(|p| p.b.as_str())
    }

    /// Score the pair `(a, b)` was accepted at, or `None` if it is not part
    /// of the mapping.
    pub fn score_of(&self, a: &str, b: &str) -> Option<f64> {
        self.pairs
            .iter()
            .find(|p| p.a == a && p.b == b)
            .map(|p| p.score)
    }

    pub fn total_score(&self) -> f64 {
        self.pairs.iter().map(|p| p.score).sum()
    }
}

fn remaining(items: &[String], used: &AHashSet<&str>) -> Vec<String> {
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut left = Vec::new();
    for item in items {
        if !used.contains(item.as_str()) && seen.insert(item.as_str()) {
            left.push(item.clone());
        }
    }
    left
}
