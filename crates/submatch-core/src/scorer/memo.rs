use super::Scorer;
use ahash::AHashMap;
use std::cell::RefCell;
use tracing::trace;

/// Caches another scorer's results by the exact ordered pair of raw names.
///
/// One instance belongs to one matching run; entries never go stale because
/// names are immutable for the run's lifetime.
pub struct MemoizedScorer<S> {
    inner: S,
    cache: RefCell<AHashMap<(String, String), f64>>,
}

impl<S: Scorer> MemoizedScorer<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: RefCell::new(AHashMap::new()),
        }
    }

    pub fn cached_pairs(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Scorer> Scorer for MemoizedScorer<S> {
    fn score(&self, a: &str, b: &str) -> f64 {
        let key = (a.to_string(), b.to_string());
        if let Some(&hit) = self.cache.borrow().get(&key) {
            return hit;
        }

        let score = self.inner.score(a, b);
        trace!("Scored {} / {} = {:.3}", a, b, score);
        self.cache.borrow_mut().insert(key, score);
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingScorer {
        calls: Cell<usize>,
    }

    impl Scorer for CountingScorer {
        fn score(&self, a: &str, b: &str) -> f64 {
            self.calls.set(self.calls.get() + 1);
            if a == b {
                1.0
            } else {
                0.5
            }
        }
    }

    #[test]
    fn test_repeated_pair_hits_cache() {
        let memo = MemoizedScorer::new(CountingScorer { calls: Cell::new(0) });
        assert_eq!(memo.score("a.mkv", "b.srt"), 0.5);
        assert_eq!(memo.score("a.mkv", "b.srt"), 0.5);
        assert_eq!(memo.score("a.mkv", "a.mkv"), 1.0);
        assert_eq!(memo.inner().calls.get(), 2);
        assert_eq!(memo.cached_pairs(), 2);
    }

    #[test]
    fn test_key_is_ordered_raw_pair() {
        let memo = MemoizedScorer::new(CountingScorer { calls: Cell::new(0) });
        memo.score("a.mkv", "b.srt");
        memo.score("b.srt", "a.mkv");
        memo.score("./a.mkv", "b.srt");
        assert_eq!(memo.inner().calls.get(), 3);
    }

    #[test]
    fn test_matches_wrapped_scorer() {
        let memo = MemoizedScorer::new(crate::scorer::ScoreMethod::Similarity);
        let direct = crate::scorer::similarity_ratio("The.Movie.mkv", "the movie.srt");
        assert_eq!(memo.score("The.Movie.mkv", "the movie.srt"), direct);
        assert_eq!(memo.score("The.Movie.mkv", "the movie.srt"), direct);
    }
}
