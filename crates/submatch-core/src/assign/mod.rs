//! Turning pairwise scores into a one-to-one mapping.
//!
//! Three strategies share one entry point, [`match_names`]:
//!
//! - **greedy**: commit the best-scoring free pair first, stop at `limit`
//! - **zip**: pair items by position, ignoring scores
//! - **permutation**: try every ordering of the first collection, greedily
//!   assigning in that order, and keep the ordering with the highest total
//!
//! None of them is a true optimal bipartite assignment. The permutation
//! search only reorders one side, so it is the best *greedy-per-ordering*
//! result, not the global optimum.

mod greedy;
mod permutation;
mod zip;

use crate::error::{Error, Result};
use crate::result::MatchResult;
use crate::scorer::Scorer;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Orderings of more items than this are refused unless the caller raises it.
pub const DEFAULT_MAX_PERMUTATION_ITEMS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Greedy,
    Zip,
    Permutation,
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" | "similarity" | "default" => Ok(Strategy::Greedy),
            "zip" => Ok(Strategy::Zip),
            "permutation" | "exhaustive" => Ok(Strategy::Permutation),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::Zip => write!(f, "zip"),
            Strategy::Permutation => write!(f, "permutation"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    pub strategy: Strategy,
    /// Minimal score for a pair to be accepted. Ignored by [`Strategy::Zip`].
    pub limit: f64,
    /// Largest first collection the permutation search accepts.
    pub max_permutation_items: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Greedy,
            limit: crate::config::DEFAULT_LIMIT,
            max_permutation_items: DEFAULT_MAX_PERMUTATION_ITEMS,
        }
    }
}

impl MatchOptions {
    pub fn new(strategy: Strategy, limit: f64) -> Self {
        Self {
            strategy,
            limit,
            ..Self::default()
        }
    }
}

/// Pair `items_a` with `items_b` under `options`.
///
/// Empty input on either side is not an error: the mapping is empty and the
/// other side is entirely unmatched. Callers are expected to sort both
/// collections first so ties and positions are reproducible.
pub fn match_names<S: Scorer>(
    items_a: &[String],
    items_b: &[String],
    scorer: &S,
    options: &MatchOptions,
) -> Result<MatchResult> {
    if options.strategy != Strategy::Zip && !(0.0..=1.0).contains(&options.limit) {
        return Err(Error::InvalidLimit(options.limit));
    }

    if items_a.is_empty() || items_b.is_empty() {
        debug!(
            "Nothing to pair ({} vs {} items)",
            items_a.len(),
            items_b.len()
        );
        return Ok(MatchResult::assemble(items_a, items_b, Vec::new()));
    }

    let pairs = match options.strategy {
        Strategy::Greedy => greedy::assign(items_a, items_b, scorer, options.limit),
        Strategy::Zip => zip::assign(items_a, items_b, scorer),
        Strategy::Permutation => {
            if items_a.len() > options.max_permutation_items {
                return Err(Error::CombinatorialBlowup {
                    items: items_a.len(),
                    max: options.max_permutation_items,
                });
            }
            permutation::assign(items_a, items_b, scorer, options.limit)
        }
    };

    debug!(
        "{} strategy accepted {} pairs out of {} x {} items",
        options.strategy,
        pairs.len(),
        items_a.len(),
        items_b.len()
    );

    Ok(MatchResult::assemble(items_a, items_b, pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!("greedy".parse::<Strategy>().unwrap(), Strategy::Greedy);
        assert_eq!("Similarity".parse::<Strategy>().unwrap(), Strategy::Greedy);
        assert_eq!("zip".parse::<Strategy>().unwrap(), Strategy::Zip);
        assert_eq!("exhaustive".parse::<Strategy>().unwrap(), Strategy::Permutation);
        assert!(matches!(
            "hungarian".parse::<Strategy>(),
            Err(Error::UnknownStrategy(s)) if s == "hungarian"
        ));
    }

    #[test]
    fn test_strategy_display_round_trips() {
        for strategy in [Strategy::Greedy, Strategy::Zip, Strategy::Permutation] {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }
}
