//! Pairwise scoring of file names.
//!
//! Every scorer is symmetric, returns a value in `[0, 1]` and only looks at
//! the normalized stems of its inputs.

pub mod memo;
pub mod numeric;
pub mod similarity;

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

pub use memo::MemoizedScorer;
pub use numeric::{extract_numbers, numeric_score};
pub use similarity::{indel_distance, similarity_ratio};

pub trait Scorer {
    fn score(&self, a: &str, b: &str) -> f64;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, a: &str, b: &str) -> f64 {
        (**self).score(a, b)
    }
}

/// How two names are compared, fixed when a scorer is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreMethod {
    /// Edit-distance ratio of the stems.
    #[default]
    Similarity,
    /// 1 when the leading numbers of both stems agree, else 0.
    Numeric,
}

impl Scorer for ScoreMethod {
    fn score(&self, a: &str, b: &str) -> f64 {
        match self {
            ScoreMethod::Similarity => similarity_ratio(a, b),
            ScoreMethod::Numeric => numeric_score(a, b),
        }
    }
}

impl FromStr for ScoreMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "similarity" | "ratio" => Ok(ScoreMethod::Similarity),
            "numeric" | "numbers" => Ok(ScoreMethod::Numeric),
            _ => Err(Error::UnknownScoreMethod(s.to_string())),
        }
    }
}

impl fmt::Display for ScoreMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoreMethod::Similarity => write!(f, "similarity"),
            ScoreMethod::Numeric => write!(f, "numeric"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_method() {
        assert_eq!("similarity".parse::<ScoreMethod>().unwrap(), ScoreMethod::Similarity);
        assert_eq!(" Numeric ".parse::<ScoreMethod>().unwrap(), ScoreMethod::Numeric);
        assert!(matches!(
            "soundex".parse::<ScoreMethod>(),
            Err(Error::UnknownScoreMethod(s)) if s == "soundex"
        ));
    }

    #[test]
    fn test_scores_are_symmetric() {
        let names = [
            "Movie.Name.2020.mkv",
            "movie name 2020.srt",
            "Show.S01E02.720p.mkv",
            "show_1x02.srt",
            "",
            "README",
        ];
        for method in [ScoreMethod::Similarity, ScoreMethod::Numeric] {
            for a in names {
                for b in names {
                    assert_eq!(method.score(a, b), method.score(b, a), "{method} {a} {b}");
                }
            }
        }
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let names = ["a.mkv", "abcdef.srt", "x1y2.avi", "12.sub", ".hidden"];
        for method in [ScoreMethod::Similarity, ScoreMethod::Numeric] {
            for a in names {
                for b in names {
                    let s = method.score(a, b);
                    assert!((0.0..=1.0).contains(&s), "{method} {a} {b} -> {s}");
                }
            }
        }
    }
}
