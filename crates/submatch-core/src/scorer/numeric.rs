use crate::normalize::normalize;
use regex::Regex;

/// Numbers past the leading season/episode pair (resolution, year) are ignored.
pub const MAX_NUMERIC_TOKENS: usize = 2;

lazy_static::lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new("[0-9]+").expect("digit pattern is valid");
}

/// All maximal ASCII digit runs of the normalized stem, left to right, as
/// integers, truncated to [`MAX_NUMERIC_TOKENS`]. Runs too long for a `u64`
/// saturate to `u64::MAX`.
pub fn extract_numbers(name: &str) -> Vec<u64> {
    let key = normalize(name);
    DIGIT_RUN
        .find_iter(&key)
        .take(MAX_NUMERIC_TOKENS)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .collect()
}

/// 1.0 when both names carry numbers and their leading numbers agree.
pub fn numeric_score(a: &str, b: &str) -> f64 {
    let a = extract_numbers(a);
    let b = extract_numbers(b);

    if !a.is_empty() && a == b {
        1.0
    } else {
        0.0
    }
}
