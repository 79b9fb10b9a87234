//! # Transverse Load Distribution
//!
//! Every theory follows the same pattern:
//!
//! - inputs are a [`CrossSection`] and a [`TrafficLoadConfiguration`]
//!   (plus member stiffnesses for GMB), all JSON-serializable
//! - `calculate(...) -> Result<*Result, CalcError>` is a pure function
//! - results are JSON-serializable and never cached
//!
//! ## Available Theories
//!
//! - [`courbon`] - Rigid diaphragms, one coefficient set per load family
//! - [`engesser`] - Finite diaphragm count (not yet available)
//! - [`gmb`] - Guyon-Massonnet-Bares orthotropic plate, per-load coefficients

pub mod courbon;
pub mod engesser;
pub mod gmb;
pub mod hyperbolic;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cross_section::CrossSection;
use crate::errors::CalcResult;
use crate::loads::{LoadGroup, TrafficLoadConfiguration};

// Re-export commonly used types
pub use courbon::{CourbonResult, GroupDistribution};
pub use gmb::{CoefficientTable, GmbResult, LoadColumn, StiffnessProperties};

/// Distribution theory selection.
///
/// Serialized with a `"theory"` tag so a stored load case records how it is
/// to be analyzed:
///
/// ```json
/// { "theory": "Courbon" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "theory", content = "stiffness")]
pub enum DistributionTheory {
    /// Rigid transverse diaphragms
    Courbon,
    /// Rigid diaphragms corrected for a finite diaphragm count
    Engesser,
    /// Orthotropic plate with the given member stiffnesses
    Gmb(StiffnessProperties),
}

impl DistributionTheory {
    /// Short code for file names and keys
    pub fn code(&self) -> &'static str {
        match self {
            DistributionTheory::Courbon => "courbon",
            DistributionTheory::Engesser => "engesser",
            DistributionTheory::Gmb(_) => "gmb",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DistributionTheory::Courbon => courbon::THEORY,
            DistributionTheory::Engesser => engesser::THEORY,
            DistributionTheory::Gmb(_) => gmb::THEORY,
        }
    }
}

impl fmt::Display for DistributionTheory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of any distribution theory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "theory", content = "result")]
pub enum DistributionOutcome {
    /// Courbon (and, once available, Engesser) coefficients per load family
    Courbon(CourbonResult),
    /// GMB coefficients per load item
    Gmb(GmbResult),
}

impl DistributionOutcome {
    /// Beam position → coefficient series for charting
    pub fn chart_series(&self) -> Vec<crate::plot::CoefficientSeries> {
        match self {
            DistributionOutcome::Courbon(result) => result.chart_series(),
            DistributionOutcome::Gmb(result) => result.chart_series(),
        }
    }
}

/// Run the selected theory.
///
/// ## Example
///
/// ```rust
/// use deck_core::calculations::{self, DistributionOutcome, DistributionTheory};
/// use deck_core::cross_section::CrossSection;
/// use deck_core::loads::{TrafficLoadConfiguration, Vehicle};
///
/// let section = CrossSection::new(11.28, 3, 3.76);
/// let vehicle = Vehicle::from_lists(3.5, vec![50.0, 50.0], vec![2.0])
///     .unwrap()
///     .with_distributed_load(9.0);
/// let traffic = TrafficLoadConfiguration::new(vec![vehicle], vec![-3.5]).unwrap();
///
/// let outcome = calculations::calculate(&section, &traffic, &DistributionTheory::Courbon).unwrap();
/// assert!(matches!(outcome, DistributionOutcome::Courbon(_)));
/// ```
pub fn calculate(
    section: &CrossSection,
    traffic: &TrafficLoadConfiguration,
    theory: &DistributionTheory,
) -> CalcResult<DistributionOutcome> {
    log::debug!(
        "Distributing {} vehicle(s) over {} beams with {}",
        traffic.vehicle_count(),
        section.beam_count,
        theory
    );

    match theory {
        DistributionTheory::Courbon => courbon::calculate(section, traffic).map(DistributionOutcome::Courbon),
        DistributionTheory::Engesser => engesser::calculate(section, traffic).map(DistributionOutcome::Courbon),
        DistributionTheory::Gmb(stiffness) => {
            gmb::calculate(section, traffic, stiffness).map(DistributionOutcome::Gmb)
        }
    }
}

/// Log loads placed beyond the carriageway edges; they are still distributed.
pub(crate) fn warn_loads_outside_carriageway(section: &CrossSection, group: &LoadGroup) {
    let half_width = section.half_width_m();
    for load in &group.loads {
        if load.eccentricity_m.abs() > half_width {
            log::warn!(
                "{} load of {:.2} kN at {:+.2} m lies outside the carriageway (±{:.2} m)",
                group.family.display_name(),
                load.weight_kn,
                load.eccentricity_m,
                half_width
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::Vehicle;

    fn traffic() -> TrafficLoadConfiguration {
        let vehicle = Vehicle::from_lists(3.5, vec![50.0, 50.0], vec![2.0])
            .unwrap()
            .with_distributed_load(9.0);
        TrafficLoadConfiguration::new(vec![vehicle], vec![-3.5]).unwrap()
    }

    fn stiffness() -> StiffnessProperties {
        StiffnessProperties {
            beam_elastic_modulus_kn_m2: 35.0e6,
            diaphragm_elastic_modulus_kn_m2: 35.0e6,
            slab_elastic_modulus_kn_m2: 33.0e6,
            poisson_ratio: 0.2,
            beam_inertia_m4: 0.5,
            diaphragm_inertia_m4: 0.1,
            beam_torsional_inertia_m4: 0.05,
            diaphragm_torsional_inertia_m4: 0.02,
        }
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let section = CrossSection::new(11.28, 3, 3.76)
            .with_beam_length(30.0)
            .with_diaphragms(3, 7.5);

        let outcome = calculate(&section, &traffic(), &DistributionTheory::Courbon).unwrap();
        assert_eq!(
            outcome,
            DistributionOutcome::Courbon(courbon::calculate(&section, &traffic()).unwrap())
        );

        let theory = DistributionTheory::Gmb(stiffness());
        let outcome = calculate(&section, &traffic(), &theory).unwrap();
        assert_eq!(
            outcome,
            DistributionOutcome::Gmb(gmb::calculate(&section, &traffic(), &stiffness()).unwrap())
        );
    }

    #[test]
    fn test_engesser_dispatch_unsupported() {
        let section = CrossSection::new(11.28, 3, 3.76).with_diaphragms(2, 7.5);
        let err = calculate(&section, &traffic(), &DistributionTheory::Engesser).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");
    }

    #[test]
    fn test_theory_names() {
        assert_eq!(DistributionTheory::Courbon.code(), "courbon");
        assert_eq!(DistributionTheory::Gmb(stiffness()).to_string(), "GMB");
        assert_eq!(DistributionTheory::Engesser.display_name(), "Engesser");
    }

    #[test]
    fn test_theory_serialization() {
        let json = serde_json::to_string(&DistributionTheory::Courbon).unwrap();
        assert_eq!(json, r#"{"theory":"Courbon"}"#);

        let theory = DistributionTheory::Gmb(stiffness());
        let json = serde_json::to_string(&theory).unwrap();
        assert!(json.contains(r#""theory":"Gmb""#));
        let back: DistributionTheory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theory);
    }
}
