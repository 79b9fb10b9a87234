//! Decimal rounding used for reported eccentricities, coefficients and forces.

/// Round `value` to `decimals` decimal places, halves away from zero.
///
/// ```rust
/// use deck_core::rounding::round_to;
///
/// assert_eq!(round_to(0.79883, 3), 0.799);
/// assert_eq!(round_to(-2.004999, 2), -2.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    // `+ 0.0` folds a negative zero into 0.0
    (value * factor).round() / factor + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to(3.7649, 2), 3.76);
        assert_eq!(round_to(-0.1324, 3), -0.132);
        assert_eq!(round_to(12.0, 0), 12.0);
    }

    #[test]
    fn test_negative_zero_is_folded() {
        let rounded = round_to(-0.0001, 2);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }
}
