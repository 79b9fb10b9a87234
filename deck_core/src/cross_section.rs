//! # Deck Cross-Section
//!
//! Transverse layout of a multi-beam deck: carriageway, uniformly spaced
//! longitudinal beams, cantilevers and the internal diaphragms along the span.
//!
//! Beam positions are measured as signed eccentricities from the deck
//! centerline (negative to the left). They are derived on every call from the
//! stored fields, never cached.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::cross_section::CrossSection;
//!
//! let section = CrossSection::new(11.28, 3, 3.76).with_cantilevers(1.88, 1.88);
//! assert_eq!(section.beam_eccentricities().unwrap(), vec![-3.76, 0.0, 3.76]);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::rounding::round_to;

/// Default number of internal diaphragms (end diaphragms over supports excluded)
pub const DEFAULT_DIAPHRAGM_COUNT: u32 = 3;

fn default_diaphragm_count() -> u32 {
    DEFAULT_DIAPHRAGM_COUNT
}

/// Deck cross-section and longitudinal framing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "carriageway_width_m": 11.28,
///   "beam_count": 3,
///   "beam_spacing_m": 3.76,
///   "cantilever_left_m": 1.88,
///   "cantilever_right_m": 1.88,
///   "beam_length_m": 30.0,
///   "diaphragm_count": 3,
///   "diaphragm_spacing_m": 7.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    /// Width of the carriageway (m)
    pub carriageway_width_m: f64,

    /// Number of longitudinal beams (at least 2)
    pub beam_count: usize,

    /// Uniform spacing between adjacent beams (m)
    pub beam_spacing_m: f64,

    /// Left cantilever length (m)
    #[serde(default)]
    pub cantilever_left_m: f64,

    /// Right cantilever length (m)
    #[serde(default)]
    pub cantilever_right_m: f64,

    /// Beam span length (m), required by the GMB theory
    #[serde(default)]
    pub beam_length_m: f64,

    /// Number of internal transverse diaphragms
    #[serde(default = "default_diaphragm_count")]
    pub diaphragm_count: u32,

    /// Longitudinal spacing between diaphragms (m), required by the GMB theory
    #[serde(default)]
    pub diaphragm_spacing_m: f64,
}

impl CrossSection {
    /// Create a cross-section from the required fields; optional fields take
    /// their defaults (no cantilevers, zero beam length, 3 diaphragms).
    pub fn new(carriageway_width_m: f64, beam_count: usize, beam_spacing_m: f64) -> Self {
        CrossSection {
            carriageway_width_m,
            beam_count,
            beam_spacing_m,
            cantilever_left_m: 0.0,
            cantilever_right_m: 0.0,
            beam_length_m: 0.0,
            diaphragm_count: DEFAULT_DIAPHRAGM_COUNT,
            diaphragm_spacing_m: 0.0,
        }
    }

    /// Set cantilever lengths and return self (builder pattern)
    pub fn with_cantilevers(mut self, left_m: f64, right_m: f64) -> Self {
        self.cantilever_left_m = left_m;
        self.cantilever_right_m = right_m;
        self
    }

    /// Set beam span length and return self (builder pattern)
    pub fn with_beam_length(mut self, length_m: f64) -> Self {
        self.beam_length_m = length_m;
        self
    }

    /// Set internal diaphragm count and spacing and return self (builder pattern)
    pub fn with_diaphragms(mut self, count: u32, spacing_m: f64) -> Self {
        self.diaphragm_count = count;
        self.diaphragm_spacing_m = spacing_m;
        self
    }

    /// Half of the carriageway width, `b` in the GMB formulas (m)
    pub fn half_width_m(&self) -> f64 {
        self.carriageway_width_m / 2.0
    }

    /// Overall deck width: outer beams plus both cantilevers (m)
    pub fn deck_width_m(&self) -> f64 {
        let beams = self.beam_count.saturating_sub(1) as f64 * self.beam_spacing_m;
        self.cantilever_left_m + beams + self.cantilever_right_m
    }

    /// Validate the fields every theory relies on.
    pub fn validate(&self) -> CalcResult<()> {
        self.check_beam_layout()?;
        if !(self.carriageway_width_m > 0.0) || !self.carriageway_width_m.is_finite() {
            return Err(CalcError::invalid_input(
                "carriageway_width_m",
                self.carriageway_width_m.to_string(),
                "Carriageway width must be positive",
            ));
        }
        for (field, value) in [
            ("cantilever_left_m", self.cantilever_left_m),
            ("cantilever_right_m", self.cantilever_right_m),
            ("beam_length_m", self.beam_length_m),
            ("diaphragm_spacing_m", self.diaphragm_spacing_m),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value cannot be negative",
                ));
            }
        }
        Ok(())
    }

    fn check_beam_layout(&self) -> CalcResult<()> {
        if self.beam_count < 2 {
            return Err(CalcError::invalid_configuration(format!(
                "number of beams is {}, at least 2 are required",
                self.beam_count
            )));
        }
        if !(self.beam_spacing_m > 0.0) || !self.beam_spacing_m.is_finite() {
            return Err(CalcError::invalid_input(
                "beam_spacing_m",
                self.beam_spacing_m.to_string(),
                "Beam spacing must be positive",
            ));
        }
        Ok(())
    }

    /// Signed distance of each beam from the deck centerline (m), left to right,
    /// rounded to 2 decimals.
    ///
    /// With an odd beam count the middle beam sits exactly on the centerline;
    /// with an even count the two middle beams straddle it at ±spacing/2.
    ///
    /// # Errors
    ///
    /// * `InvalidConfiguration` - fewer than 2 beams
    /// * `InvalidInput` - non-positive beam spacing
    pub fn beam_eccentricities(&self) -> CalcResult<Vec<f64>> {
        self.check_beam_layout()?;

        let n = self.beam_count;
        let s = self.beam_spacing_m;

        let eccentricities = match n {
            2 => vec![round_to(-s / 2.0, 2), round_to(s / 2.0, 2)],
            _ if n % 2 == 0 => {
                let mid = n / 2;
                (1..=n)
                    .map(|i| round_to(-(s / 2.0 + s * (mid as f64 - i as f64)), 2))
                    .collect()
            }
            _ => {
                let mid = n / 2 + 1;
                (1..=n)
                    .map(|i| round_to(-(s * (mid as f64 - i as f64)), 2))
                    .collect()
            }
        };

        Ok(eccentricities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_section() -> CrossSection {
        CrossSection::new(11.28, 3, 3.76).with_cantilevers(1.88, 1.88)
    }

    #[test]
    fn test_three_beam_eccentricities() {
        let ecc = test_section().beam_eccentricities().unwrap();
        assert_eq!(ecc, vec![-3.76, 0.0, 3.76]);
    }

    #[test]
    fn test_two_beams_straddle_centerline() {
        let section = CrossSection::new(7.0, 2, 3.5);
        assert_eq!(section.beam_eccentricities().unwrap(), vec![-1.75, 1.75]);
    }

    #[test]
    fn test_four_beam_eccentricities() {
        let section = CrossSection::new(10.0, 4, 2.0);
        assert_eq!(section.beam_eccentricities().unwrap(), vec![-3.0, -1.0, 1.0, 3.0]);
    }

    #[test]
    fn test_eccentricities_symmetric_for_all_counts() {
        for n in 2..=12 {
            let section = CrossSection::new(12.0, n, 2.4);
            let ecc = section.beam_eccentricities().unwrap();
            assert_eq!(ecc.len(), n);

            // Closed under negation, ordered left to right
            for (left, right) in ecc.iter().zip(ecc.iter().rev()) {
                assert!((left + right).abs() < 1e-9, "n = {}: {:?}", n, ecc);
            }
            assert!(ecc.windows(2).all(|w| w[0] < w[1]));

            let zeros = ecc.iter().filter(|e| **e == 0.0).count();
            if n % 2 == 1 {
                assert_eq!(zeros, 1, "odd count {} needs one centered beam", n);
                assert!(ecc[n / 2].is_sign_positive());
            } else {
                assert_eq!(zeros, 0, "even count {} has no centered beam", n);
            }
        }
    }

    #[test]
    fn test_single_beam_rejected() {
        let section = CrossSection::new(5.0, 1, 2.0);
        let err = section.beam_eccentricities().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let section = CrossSection::new(5.0, 3, 0.0);
        let err = section.beam_eccentricities().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_validate_negative_cantilever() {
        let section = test_section().with_cantilevers(-1.0, 1.88);
        assert!(section.validate().is_err());
        assert!(test_section().validate().is_ok());
    }

    #[test]
    fn test_deck_width() {
        assert!((test_section().deck_width_m() - 11.28).abs() < 1e-9);
        assert!((test_section().half_width_m() - 5.64).abs() < 1e-9);
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{ "carriageway_width_m": 9.0, "beam_count": 4, "beam_spacing_m": 2.5 }"#;
        let section: CrossSection = serde_json::from_str(json).unwrap();
        assert_eq!(section.diaphragm_count, DEFAULT_DIAPHRAGM_COUNT);
        assert_eq!(section.cantilever_left_m, 0.0);
        assert_eq!(section, CrossSection::new(9.0, 4, 2.5));
    }
}
