//! # Engesser Load Distribution
//!
//! Rigid-diaphragm distribution for decks with a small, finite number
//! (1 to 3) of internal diaphragms. The Courbon coefficients are corrected by
//! factors that depend on the diaphragm count and tend to 1 as the count grows.
//!
//! ## Current Status: Placeholder
//!
//! Input validation is complete. The diaphragm-count correction tables are
//! not available yet, so every valid request is answered with
//! `UnsupportedConfiguration` instead of an approximate result. Use
//! [`courbon`](super::courbon) or [`gmb`](super::gmb) in the meantime.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::engesser;
//! use deck_core::cross_section::CrossSection;
//! use deck_core::loads::TrafficLoadConfiguration;
//!
//! let section = CrossSection::new(11.28, 3, 3.76).with_diaphragms(5, 5.0);
//! let err = engesser::calculate(&section, &TrafficLoadConfiguration::default()).unwrap_err();
//! assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");
//! ```

use super::courbon::CourbonResult;
use crate::cross_section::CrossSection;
use crate::errors::{CalcError, CalcResult};
use crate::loads::TrafficLoadConfiguration;

/// Name used in error messages
pub const THEORY: &str = "Engesser";

/// Largest internal diaphragm count the theory covers
pub const MAX_DIAPHRAGMS: u32 = 3;

/// Check that the deck falls inside the theory's range.
///
/// # Errors
///
/// * `UnsupportedConfiguration` - zero or more than 3 internal diaphragms
/// * `InvalidConfiguration` / `InvalidInput` - invalid deck layout
pub fn validate(section: &CrossSection, traffic: &TrafficLoadConfiguration) -> CalcResult<()> {
    let n = section.diaphragm_count;
    if n == 0 {
        return Err(CalcError::unsupported(
            THEORY,
            "number of internal diaphragms is less than 1",
        ));
    }
    if n > MAX_DIAPHRAGMS {
        return Err(CalcError::unsupported(
            THEORY,
            format!(
                "{} internal diaphragms exceed the supported maximum of {}; use the Courbon or GMB theory",
                n, MAX_DIAPHRAGMS
            ),
        ));
    }
    section.validate()?;
    section.beam_eccentricities()?;
    traffic.validate()
}

/// Distribute the traffic configuration with diaphragm-count corrections.
///
/// Always fails until the correction tables are available; see the module
/// documentation.
pub fn calculate(section: &CrossSection, traffic: &TrafficLoadConfiguration) -> CalcResult<CourbonResult> {
    validate(section, traffic)?;
    // TODO: apply the 1/2/3-diaphragm correction factors once tabulated values are sourced
    Err(CalcError::unsupported(
        THEORY,
        format!(
            "correction factors for {} internal diaphragm(s) are not available",
            section.diaphragm_count
        ),
    ))
}
