//! Numeric safety helpers
//!
//! Every number that enters the engine goes through [`safe_number`] once, at
//! deserialization or normalization time. Calculators may then assume finite,
//! well-defined operands.

pub use bidcalc_types::{percent_of, ratio_of};

/// Returns `default` when `value` is absent or NaN, otherwise the value itself.
pub fn safe_number(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        _ => default,
    }
}

/// Shorthand for `safe_number(Some(value), 0.0)`.
pub fn safe(value: f64) -> f64 {
    safe_number(Some(value), 0.0)
}

/// Clamp to zero from below; NaN becomes zero.
pub fn non_negative(value: f64) -> f64 {
    let v = safe(value);
    if v < 0.0 {
        0.0
    } else {
        v
    }
}

/// Replace infinities as well as NaN with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_uses_default() {
        assert_eq!(safe_number(None, 0.0), 0.0);
        assert_eq!(safe_number(None, 7.5), 7.5);
    }

    #[test]
    fn test_nan_uses_default() {
        assert_eq!(safe_number(Some(f64::NAN), 3.0), 3.0);
        assert_eq!(safe(f64::NAN), 0.0);
    }

    #[test]
    fn test_value_passes_through() {
        assert_eq!(safe_number(Some(-2.5), 10.0), -2.5);
        assert_eq!(safe_number(Some(0.0), 10.0), 0.0);
    }

    #[test]
    fn test_never_nan() {
        let inputs = [None, Some(f64::NAN), Some(1.0), Some(-1.0), Some(f64::INFINITY)];
        for input in inputs {
            assert!(!safe_number(input, 0.0).is_nan());
        }
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(-4.0), 0.0);
        assert_eq!(non_negative(f64::NAN), 0.0);
        assert_eq!(non_negative(4.0), 4.0);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
        assert_eq!(finite_or_zero(2.0), 2.0);
    }
}
