use crate::types::scoring::Score;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Rounds to the nearest integer and clamps into `0..=100`. NaN maps to 0.
pub fn clamp_score(value: f64) -> Score {
    if value.is_nan() {
        return 0;
    }
    // Non-NaN and inside 0..=100, so the cast is exact.
    value.round().clamp(MIN_SCORE, MAX_SCORE) as Score
}

/// `numerator / denominator`, or `fallback` when the denominator is zero.
pub fn ratio_or(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator == 0.0 {
        fallback
    } else {
        numerator / denominator
    }
}

/// Upper-bounds `value` by `cap`. NaN passes through so `clamp_score`
/// still maps it to 0.
pub fn capped(value: f64, cap: f64) -> f64 {
    if value > cap {
        cap
    } else {
        value
    }
}
