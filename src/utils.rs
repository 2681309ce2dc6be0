//! Numeric helpers shared by the comparator and the adversarial search

use std::cmp::Ordering;

/// Largest magnitude an evaluation may take inside alpha-beta
///
/// Kept well below 2^53 so that `value + 1.0` and `value - 1.0` are exact,
/// which the null-window arithmetic of MTD(f) depends on.
pub const MAX_VALUE: f64 = 1e15;

/// Compares two floats with total-order semantics
///
/// NaN compares greater than every number and `-0.0` less than `0.0`, so the
/// result is usable inside ordered containers.
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Compares optional values where a missing value loses against any present one
pub fn compare_optional_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => compare_f64(x, y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Maps an evaluation into the finite range alpha-beta works with
///
/// NaN is read as a neutral 0, infinities and huge values are clamped to
/// `±MAX_VALUE`.
pub fn sanitize_value(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(-MAX_VALUE, MAX_VALUE)
}
