//! Rounding of BMI values for display
//!
//! Pure arithmetic with no `std` float intrinsics, so it is usable from
//! `no_std` contexts.

/// Magnitude from which every `f64` is already an integer (2^52)
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Round to the nearest integer, ties away from zero
///
/// Non-finite values pass through unchanged. The result is never negative
/// zero: values in (-0.5, 0.5) round to `0.0`.
pub fn round_half_away_from_zero(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    if value >= INTEGRAL_THRESHOLD || value <= -INTEGRAL_THRESHOLD {
        return value;
    }

    // Below 2^52 the cast truncates exactly and the difference is exact
    let truncated = (value as i64) as f64;
    let fraction = value - truncated;

    if fraction >= 0.5 {
        truncated + 1.0
    } else if fraction <= -0.5 {
        truncated - 1.0
    } else {
        truncated
    }
}
