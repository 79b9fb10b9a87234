//! # Courbon Load Distribution
//!
//! Rigid-diaphragm distribution: the deck cross-section translates and
//! rotates as a rigid body, so the share of a load taken by beam `i` is
//!
//! ```text
//! k_i = 1/n + e · y_i / Σ y_j²
//! ```
//!
//! where `e` is the resultant eccentricity of the load group and `y_i` the
//! beam eccentricity.
//!
//! ## Assumptions
//!
//! - Diaphragms infinitely stiff in bending and effectively continuous along the span
//! - Beams infinitely stiff in torsion
//! - At least one internal diaphragm
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::courbon;
//! use deck_core::cross_section::CrossSection;
//! use deck_core::loads::{TrafficLoadConfiguration, Vehicle};
//!
//! let section = CrossSection::new(11.28, 3, 3.76).with_cantilevers(1.88, 1.88);
//! let vehicle = Vehicle::from_lists(3.50, vec![1.0], vec![0.0])
//!     .unwrap()
//!     .with_distributed_load(9.0);
//! let traffic = TrafficLoadConfiguration::new(vec![vehicle], vec![-3.50]).unwrap();
//!
//! let result = courbon::calculate(&section, &traffic).unwrap();
//! assert_eq!(result.concentrated.coefficients, vec![0.799, 0.333, -0.132]);
//! ```

use serde::{Deserialize, Serialize};

use super::warn_loads_outside_carriageway;
use crate::cross_section::CrossSection;
use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadFamily, LoadGroup, TrafficLoadConfiguration};
use crate::plot::CoefficientSeries;
use crate::rounding::round_to;

/// Name used in error messages
pub const THEORY: &str = "Courbon";

/// Distribution of one load group over the beams.
///
/// ## JSON Example
///
/// ```json
/// {
///   "family": "Concentrated",
///   "resultant_force_kn": 1.0,
///   "resultant_eccentricity_m": -3.5,
///   "resultant_moment_knm": -3.5,
///   "coefficients": [0.799, 0.333, -0.132],
///   "beam_forces_kn": [0.8, 0.33, -0.13]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDistribution {
    /// Load family this distribution belongs to
    pub family: LoadFamily,

    /// Σ weight (rounded to 2 decimals)
    pub resultant_force_kn: f64,

    /// Weight-averaged eccentricity of the group (m)
    pub resultant_eccentricity_m: f64,

    /// Resultant force × resultant eccentricity (rounded to 2 decimals)
    pub resultant_moment_knm: f64,

    /// Repartition coefficient per beam, ordered as the beam eccentricities (3 decimals)
    pub coefficients: Vec<f64>,

    /// Coefficient × resultant force per beam (2 decimals)
    pub beam_forces_kn: Vec<f64>,
}

/// Results from the Courbon distribution of a traffic configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourbonResult {
    /// Beam eccentricities the coefficients refer to (m)
    pub beam_eccentricities_m: Vec<f64>,

    /// Σ y_i² over all beams (m²)
    pub polar_inertia_m2: f64,

    /// Wheel-load distribution
    pub concentrated: GroupDistribution,

    /// Lane-load distribution
    pub distributed: GroupDistribution,
}

impl CourbonResult {
    /// `[conc_force, conc_moment, dist_force, dist_moment]`
    pub fn resultant_array(&self) -> [f64; 4] {
        [
            self.concentrated.resultant_force_kn,
            self.concentrated.resultant_moment_knm,
            self.distributed.resultant_force_kn,
            self.distributed.resultant_moment_knm,
        ]
    }

    /// Beam position → coefficient, one series per load family
    pub fn chart_series(&self) -> Vec<CoefficientSeries> {
        [&self.concentrated, &self.distributed]
            .into_iter()
            .map(|group| {
                CoefficientSeries::new(
                    group.family.display_name(),
                    &self.beam_eccentricities_m,
                    &group.coefficients,
                )
            })
            .collect()
    }
}

fn check_diaphragms(section: &CrossSection) -> CalcResult<()> {
    if section.diaphragm_count == 0 {
        return Err(CalcError::unsupported(
            THEORY,
            "number of internal diaphragms is less than 1",
        ));
    }
    Ok(())
}

/// Σ y_i² for a set of beam eccentricities
pub fn polar_inertia(beam_eccentricities_m: &[f64]) -> f64 {
    beam_eccentricities_m.iter().map(|y| y * y).sum()
}

/// Unrounded Courbon coefficients for a resultant eccentricity
fn raw_coefficients(beam_eccentricities_m: &[f64], polar_inertia_m2: f64, eccentricity_m: f64) -> Vec<f64> {
    let n = beam_eccentricities_m.len() as f64;
    beam_eccentricities_m
        .iter()
        .map(|y| 1.0 / n + eccentricity_m * y / polar_inertia_m2)
        .collect()
}

fn distribute(
    beam_eccentricities_m: &[f64],
    polar_inertia_m2: f64,
    group: &LoadGroup,
) -> CalcResult<GroupDistribution> {
    let eccentricity = group.resultant_eccentricity()?;
    let force = round_to(group.total_weight(), 2);
    let moment = round_to(force * eccentricity, 2);

    log::debug!(
        "Courbon {} group: R = {:.2} kN at e = {:.3} m",
        group.family.code(),
        force,
        eccentricity
    );

    let coefficients: Vec<f64> = raw_coefficients(beam_eccentricities_m, polar_inertia_m2, eccentricity)
        .into_iter()
        .map(|k| round_to(k, 3))
        .collect();
    let beam_forces_kn = coefficients.iter().map(|k| round_to(k * force, 2)).collect();

    for (y, k) in beam_eccentricities_m.iter().zip(&coefficients) {
        log::trace!("  beam at {:+.2} m: k = {:.3}", y, k);
    }

    Ok(GroupDistribution {
        family: group.family,
        resultant_force_kn: force,
        resultant_eccentricity_m: eccentricity,
        resultant_moment_knm: moment,
        coefficients,
        beam_forces_kn,
    })
}

/// Distribute a single load group.
///
/// Use this when only one family is present (e.g. wheel loads without a
/// lane load), since [`calculate`] requires both groups to carry weight.
pub fn distribute_group(section: &CrossSection, group: &LoadGroup) -> CalcResult<GroupDistribution> {
    check_diaphragms(section)?;
    section.validate()?;
    let beams = section.beam_eccentricities()?;
    let ip = polar_inertia(&beams);
    warn_loads_outside_carriageway(section, group);
    distribute(&beams, ip, group)
}

/// Distribute both load groups of a traffic configuration.
///
/// # Errors
///
/// * `UnsupportedConfiguration` - no internal diaphragm
/// * `InvalidConfiguration` - fewer than 2 beams
/// * `DegenerateLoadSet` - a load group has zero total weight
pub fn calculate(section: &CrossSection, traffic: &TrafficLoadConfiguration) -> CalcResult<CourbonResult> {
    check_diaphragms(section)?;
    section.validate()?;
    traffic.validate()?;

    let beams = section.beam_eccentricities()?;
    let ip = polar_inertia(&beams);
    log::debug!("Courbon: {} beams, polar inertia {:.4} m²", beams.len(), ip);

    let concentrated_group = traffic.concentrated_loads();
    let distributed_group = traffic.distributed_loads();
    warn_loads_outside_carriageway(section, &concentrated_group);
    warn_loads_outside_carriageway(section, &distributed_group);

    let concentrated = distribute(&beams, ip, &concentrated_group)?;
    let distributed = distribute(&beams, ip, &distributed_group)?;

    Ok(CourbonResult {
        beam_eccentricities_m: beams,
        polar_inertia_m2: ip,
        concentrated,
        distributed,
    })
}
