//! # Scaled Hyperbolic Arithmetic
//!
//! The GMB influence coefficients are ratios of products of `sinh`/`cosh`
//! whose individual factors overflow `f64` long before the ratio does (for
//! arguments above ~710). Every factor is therefore carried as
//! `mantissa × e^exponent`, with the exponent kept separately, and only the
//! final ratio is brought back to a plain `f64`.
//!
//! ```text
//! cosh(x) = e^|x| · (1 + e^(-2|x|)) / 2
//! sinh(x) = sign(x) · e^|x| · (1 - e^(-2|x|)) / 2
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A real number stored as `mantissa · e^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled {
    mantissa: f64,
    exponent: f64,
}

impl Scaled {
    /// Wrap a plain value (exponent 0)
    pub fn new(value: f64) -> Self {
        Scaled {
            mantissa: value,
            exponent: 0.0,
        }
    }

    /// Hyperbolic cosine without evaluating `e^|x|`
    pub fn cosh(x: f64) -> Self {
        let a = x.abs();
        Scaled {
            mantissa: 0.5 * (1.0 + (-2.0 * a).exp()),
            exponent: a,
        }
    }

    /// Hyperbolic sine without evaluating `e^|x|`
    pub fn sinh(x: f64) -> Self {
        let a = x.abs();
        let magnitude = -0.5 * (-2.0 * a).exp_m1();
        Scaled {
            mantissa: if x < 0.0 { -magnitude } else { magnitude },
            exponent: a,
        }
    }

    /// Bring the number back to a plain `f64`; may be infinite or NaN.
    pub fn value(self) -> f64 {
        if self.mantissa == 0.0 {
            return 0.0;
        }
        self.mantissa * self.exponent.exp()
    }
}

impl From<f64> for Scaled {
    fn from(value: f64) -> Self {
        Scaled::new(value)
    }
}

impl Mul for Scaled {
    type Output = Scaled;

    fn mul(self, rhs: Scaled) -> Scaled {
        Scaled {
            mantissa: self.mantissa * rhs.mantissa,
            exponent: self.exponent + rhs.exponent,
        }
    }
}

impl Mul<f64> for Scaled {
    type Output = Scaled;

    fn mul(self, rhs: f64) -> Scaled {
        Scaled {
            mantissa: self.mantissa * rhs,
            exponent: self.exponent,
        }
    }
}

impl Div for Scaled {
    type Output = Scaled;

    fn div(self, rhs: Scaled) -> Scaled {
        Scaled {
            mantissa: self.mantissa / rhs.mantissa,
            exponent: self.exponent - rhs.exponent,
        }
    }
}

impl Add for Scaled {
    type Output = Scaled;

    fn add(self, rhs: Scaled) -> Scaled {
        // Align on the larger exponent so both shifts are e^(<= 0)
        let exponent = self.exponent.max(rhs.exponent);
        Scaled {
            mantissa: self.mantissa * (self.exponent - exponent).exp()
                + rhs.mantissa * (rhs.exponent - exponent).exp(),
            exponent,
        }
    }
}

impl Neg for Scaled {
    type Output = Scaled;

    fn neg(self) -> Scaled {
        Scaled {
            mantissa: -self.mantissa,
            exponent: self.exponent,
        }
    }
}

impl Sub for Scaled {
    type Output = Scaled;

    fn sub(self, rhs: Scaled) -> Scaled {
        self + (-rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    #[test]
    fn test_matches_std_hyperbolics() {
        for x in [-12.5, -1.0, -0.1, 0.0, 0.3, 2.0, 30.0] {
            assert!(approx_eq(Scaled::cosh(x).value(), x.cosh(), 1e-12), "cosh({})", x);
            assert!(approx_eq(Scaled::sinh(x).value(), x.sinh(), 1e-12), "sinh({})", x);
        }
    }

    #[test]
    fn test_large_ratio_stays_finite() {
        // sinh(900)/cosh(900) = tanh(900) = 1, although both overflow on their own
        assert!(900f64.sinh().is_infinite());
        let ratio = (Scaled::sinh(900.0) / Scaled::cosh(900.0)).value();
        assert!(approx_eq(ratio, 1.0, 1e-12));

        let product = (Scaled::cosh(800.0) * Scaled::sinh(-810.0) / (Scaled::cosh(805.0) * Scaled::cosh(805.0))).value();
        assert!(approx_eq(product, -1.0, 1e-12));
    }

    #[test]
    fn test_mixed_sum() {
        let x = 1.7;
        let sum = (Scaled::cosh(x) * 2.0 - Scaled::sinh(x) + Scaled::new(0.5)).value();
        assert!(approx_eq(sum, 2.0 * x.cosh() - x.sinh() + 0.5, 1e-12));
    }

    #[test]
    fn test_overflowing_value_is_infinite() {
        let huge = Scaled::cosh(400.0) * Scaled::cosh(400.0);
        assert!(!huge.value().is_finite());
    }
}
