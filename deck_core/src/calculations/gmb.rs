//! # Guyon-Massonnet-Bares (GMB) Load Distribution
//!
//! The beam-and-diaphragm grillage is replaced by an orthotropic plate with
//! the mean flexural and torsional stiffnesses of the real framing. The
//! longitudinal behaviour is taken as the first harmonic of a simply
//! supported span, which leaves closed-form transverse influence lines.
//!
//! ## Algorithm Overview
//!
//! 1. Stiffness per unit width: `ρ_p = E_b·I_b / b_1`, `ρ_e = E_d·I_d / l_1`
//!    (flexure) and `γ_p = G_b·J_b / b_1`, `γ_e = G_d·J_d / l_1` (torsion)
//! 2. Flexural parameter `θ = (b / L)·(ρ_p/ρ_e)^¼`
//! 3. Torsional parameter `α = (γ_p + γ_e) / (2·√(ρ_p·ρ_e))`
//! 4. For every (beam, load) pair, the torsion-free coefficient `k_0` and the
//!    fully torsion-coupled coefficient `k_1`
//! 5. Interpolation `k = k_0 + (k_1 − k_0)·√α`
//!
//! Unlike Courbon, every load item gets its own column of coefficients.
//!
//! ## Numerics
//!
//! The hyperbolic products are evaluated with [`Scaled`] arithmetic so long or
//! flexible decks do not overflow in intermediate terms. A non-finite final
//! coefficient is reported as `NumericOverflow`.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::gmb::{self, StiffnessProperties};
//! use deck_core::cross_section::CrossSection;
//! use deck_core::loads::{TrafficLoadConfiguration, Vehicle};
//!
//! let section = CrossSection::new(11.28, 3, 3.76)
//!     .with_beam_length(30.0)
//!     .with_diaphragms(3, 7.5);
//! let stiffness = StiffnessProperties {
//!     beam_elastic_modulus_kn_m2: 35.0e6,
//!     diaphragm_elastic_modulus_kn_m2: 35.0e6,
//!     slab_elastic_modulus_kn_m2: 33.0e6,
//!     poisson_ratio: 0.2,
//!     beam_inertia_m4: 0.5,
//!     diaphragm_inertia_m4: 0.1,
//!     beam_torsional_inertia_m4: 0.05,
//!     diaphragm_torsional_inertia_m4: 0.02,
//! };
//! let vehicle = Vehicle::from_lists(3.5, vec![1.0], vec![0.0]).unwrap();
//! let traffic = TrafficLoadConfiguration::new(vec![vehicle], vec![-3.5]).unwrap();
//!
//! let result = gmb::calculate(&section, &traffic, &stiffness).unwrap();
//! let k_outer = result.concentrated.coefficient(0, 0).unwrap();
//! assert!(k_outer > 1.0); // the loaded edge beam takes more than the average share
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::hyperbolic::Scaled;
use super::warn_loads_outside_carriageway;
use crate::cross_section::CrossSection;
use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadFamily, LoadGroup, TrafficLoadConfiguration};
use crate::plot::CoefficientSeries;

/// Name used in error messages
pub const THEORY: &str = "GMB";

/// Elastic and sectional properties of the grillage members.
///
/// Moduli in kN/m², inertias in m⁴. The slab modulus is carried for the
/// record; the coefficients depend on the beam and diaphragm properties only.
///
/// ## JSON Example
///
/// ```json
/// {
///   "beam_elastic_modulus_kn_m2": 35000000.0,
///   "diaphragm_elastic_modulus_kn_m2": 35000000.0,
///   "slab_elastic_modulus_kn_m2": 33000000.0,
///   "poisson_ratio": 0.2,
///   "beam_inertia_m4": 0.5,
///   "diaphragm_inertia_m4": 0.1,
///   "beam_torsional_inertia_m4": 0.05,
///   "diaphragm_torsional_inertia_m4": 0.02
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StiffnessProperties {
    /// Elastic modulus of the longitudinal beams
    pub beam_elastic_modulus_kn_m2: f64,

    /// Elastic modulus of the transverse diaphragms
    pub diaphragm_elastic_modulus_kn_m2: f64,

    /// Elastic modulus of the deck slab
    pub slab_elastic_modulus_kn_m2: f64,

    /// Poisson ratio ν
    pub poisson_ratio: f64,

    /// Flexural moment of inertia of one beam
    pub beam_inertia_m4: f64,

    /// Flexural moment of inertia of one diaphragm
    pub diaphragm_inertia_m4: f64,

    /// Torsional inertia of one beam
    pub beam_torsional_inertia_m4: f64,

    /// Torsional inertia of one diaphragm
    pub diaphragm_torsional_inertia_m4: f64,
}

impl StiffnessProperties {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("beam_elastic_modulus_kn_m2", self.beam_elastic_modulus_kn_m2),
            ("diaphragm_elastic_modulus_kn_m2", self.diaphragm_elastic_modulus_kn_m2),
            ("slab_elastic_modulus_kn_m2", self.slab_elastic_modulus_kn_m2),
            ("beam_inertia_m4", self.beam_inertia_m4),
            ("diaphragm_inertia_m4", self.diaphragm_inertia_m4),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
            }
        }
        for (field, value) in [
            ("beam_torsional_inertia_m4", self.beam_torsional_inertia_m4),
            ("diaphragm_torsional_inertia_m4", self.diaphragm_torsional_inertia_m4),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Cannot be negative"));
            }
        }
        if !(self.poisson_ratio > -1.0 && self.poisson_ratio <= 0.5) {
            return Err(CalcError::invalid_input(
                "poisson_ratio",
                self.poisson_ratio.to_string(),
                "Poisson ratio must lie in (-1, 0.5]",
            ));
        }
        Ok(())
    }

    /// Shear modulus of the beams, G = E / (2(1 + ν))
    pub fn beam_shear_modulus_kn_m2(&self) -> f64 {
        self.beam_elastic_modulus_kn_m2 / (2.0 * (1.0 + self.poisson_ratio))
    }

    /// Shear modulus of the diaphragms, G = E / (2(1 + ν))
    pub fn diaphragm_shear_modulus_kn_m2(&self) -> f64 {
        self.diaphragm_elastic_modulus_kn_m2 / (2.0 * (1.0 + self.poisson_ratio))
    }
}

/// Influence coefficients of one load on one beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Influence {
    /// Torsion-free coefficient (α = 0)
    pub k0: f64,
    /// Fully torsion-coupled coefficient (α = 1)
    pub k1: f64,
    /// Interpolated coefficient for the actual α
    pub k: f64,
}

/// Equivalent orthotropic plate derived from the deck framing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrillageParameters {
    /// Half of the carriageway width, b (m)
    pub half_width_m: f64,

    /// Beam span, L (m)
    pub beam_length_m: f64,

    /// Beam flexural stiffness per unit width, ρ_p
    pub beam_flexural_stiffness: f64,

    /// Diaphragm flexural stiffness per unit length, ρ_e
    pub diaphragm_flexural_stiffness: f64,

    /// Beam torsional stiffness per unit width, γ_p
    pub beam_torsional_stiffness: f64,

    /// Diaphragm torsional stiffness per unit length, γ_e
    pub diaphragm_torsional_stiffness: f64,

    /// Flexural parameter θ
    pub theta: f64,

    /// Torsional parameter α, within [0, 1]
    pub alpha: f64,
}

impl GrillageParameters {
    /// Derive the plate parameters from the deck and member properties.
    pub fn new(section: &CrossSection, stiffness: &StiffnessProperties) -> CalcResult<Self> {
        section.validate()?;
        stiffness.validate()?;
        if !(section.beam_length_m > 0.0) {
            return Err(CalcError::invalid_input(
                "beam_length_m",
                section.beam_length_m.to_string(),
                "GMB theory needs a positive beam length",
            ));
        }
        if !(section.diaphragm_spacing_m > 0.0) {
            return Err(CalcError::invalid_input(
                "diaphragm_spacing_m",
                section.diaphragm_spacing_m.to_string(),
                "GMB theory needs a positive diaphragm spacing",
            ));
        }

        let b = section.half_width_m();
        let rho_p = stiffness.beam_elastic_modulus_kn_m2 * stiffness.beam_inertia_m4 / section.beam_spacing_m;
        let rho_e =
            stiffness.diaphragm_elastic_modulus_kn_m2 * stiffness.diaphragm_inertia_m4 / section.diaphragm_spacing_m;
        let gamma_p =
            stiffness.beam_shear_modulus_kn_m2() * stiffness.beam_torsional_inertia_m4 / section.beam_spacing_m;
        let gamma_e = stiffness.diaphragm_shear_modulus_kn_m2() * stiffness.diaphragm_torsional_inertia_m4
            / section.diaphragm_spacing_m;

        let theta = (b / section.beam_length_m) * (rho_p / rho_e).powf(0.25);
        let mut alpha = (gamma_p + gamma_e) / (2.0 * (rho_p * rho_e).sqrt());

        if !theta.is_finite() || !(theta > 0.0) {
            return Err(CalcError::numeric_overflow("flexural parameter theta"));
        }
        if !alpha.is_finite() {
            return Err(CalcError::numeric_overflow("torsional parameter alpha"));
        }
        if alpha > 1.0 {
            log::warn!("GMB torsional parameter α = {:.3} exceeds 1, clamped to 1", alpha);
            alpha = 1.0;
        }

        log::debug!("GMB: θ = {:.4}, α = {:.4}", theta, alpha);

        Ok(GrillageParameters {
            half_width_m: b,
            beam_length_m: section.beam_length_m,
            beam_flexural_stiffness: rho_p,
            diaphragm_flexural_stiffness: rho_e,
            beam_torsional_stiffness: gamma_p,
            diaphragm_torsional_stiffness: gamma_e,
            theta,
            alpha,
        })
    }

    /// Wave parameter λ = π / (L√2) · (ρ_p/ρ_e)^¼, so that λ·b = θπ/√2
    fn lambda(&self) -> f64 {
        (PI / (self.beam_length_m * 2f64.sqrt()))
            * (self.beam_flexural_stiffness / self.diaphragm_flexural_stiffness).powf(0.25)
    }

    /// Torsion-free coefficient for a beam at `y` and a load at `e`, with `e > y`.
    fn torsion_free(&self, y: f64, e: f64) -> f64 {
        let b = self.half_width_m;
        let lambda = self.lambda();

        let u = lambda * (y + b);
        let s = 2.0 * lambda * b;
        let p = lambda * (b + e);
        let m = lambda * (b - e);

        let a_low = Scaled::cosh(u) * (2.0 * u.cos());
        let a_upp = Scaled::sinh(s) * Scaled::cosh(m) * p.cos() - Scaled::cosh(p) * (s.sin() * m.cos());
        let b_low = Scaled::cosh(u) * u.sin() + Scaled::sinh(u) * u.cos();
        let b_upp_1 = Scaled::sinh(s) * (Scaled::cosh(m) * p.sin() - Scaled::sinh(m) * p.cos());
        let b_upp_2 = (Scaled::sinh(p) * m.cos() - Scaled::cosh(p) * m.sin()) * s.sin();

        let denominator = Scaled::sinh(s) * Scaled::sinh(s) - Scaled::new(s.sin().powi(2));

        ((a_low * a_upp + b_low * (b_upp_1 + b_upp_2)) / denominator * s).value()
    }

    /// Fully torsion-coupled coefficient for a beam at `y` and a load at `e`, with `e > y`.
    fn torsion_coupled(&self, y: f64, e: f64) -> f64 {
        let b = self.half_width_m;
        let theta = self.theta;

        let psi = PI * e / b;
        let beta = PI * y / b;
        let sigma = theta * PI;
        let xi = PI - (beta - psi).abs();

        let sh = Scaled::sinh(sigma);
        let ch = Scaled::cosh(sigma);

        let r = |x: f64| Scaled::cosh(theta * x) * (ch * sigma - sh) - sh * Scaled::sinh(theta * x) * (theta * x);
        let q = |x: f64| Scaled::sinh(theta * x) * (sh * 2.0 - ch * sigma) - sh * Scaled::cosh(theta * x) * (theta * x);

        let c = Scaled::cosh(theta * xi) * (ch * sigma + sh);
        let d = sh * Scaled::sinh(theta * xi) * (theta * xi);
        let e_term = r(beta) * r(psi) / (sh * ch * 3.0 - Scaled::new(sigma));
        let f_term = q(beta) * q(psi) / (sh * ch * 3.0 + Scaled::new(sigma));

        ((c - d + e_term + f_term) / (sh * sh * 2.0) * sigma).value()
    }

    /// Influence coefficients of a load at `load_eccentricity_m` on the beam at
    /// `beam_eccentricity_m`.
    ///
    /// The closed forms hold for a load to the right of the beam; the other
    /// case is mapped onto it through the antisymmetry of the influence surface.
    pub fn influence(&self, beam_eccentricity_m: f64, load_eccentricity_m: f64) -> CalcResult<Influence> {
        let (y, e) = if load_eccentricity_m <= beam_eccentricity_m {
            (-beam_eccentricity_m, -load_eccentricity_m)
        } else {
            (beam_eccentricity_m, load_eccentricity_m)
        };

        let k0 = self.torsion_free(y, e);
        if !k0.is_finite() {
            return Err(CalcError::numeric_overflow(format!(
                "k_0 for beam at {} m, load at {} m",
                beam_eccentricity_m, load_eccentricity_m
            )));
        }
        let k1 = self.torsion_coupled(y, e);
        if !k1.is_finite() {
            return Err(CalcError::numeric_overflow(format!(
                "k_1 for beam at {} m, load at {} m",
                beam_eccentricity_m, load_eccentricity_m
            )));
        }

        let k = k0 + (k1 - k0) * self.alpha.sqrt();
        Ok(Influence { k0, k1, k })
    }
}

/// Coefficients of every beam for one load item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadColumn {
    /// Load label ("Q1", "q2", ...)
    pub label: String,

    /// Position of the load (m)
    pub load_eccentricity_m: f64,

    /// Torsion-free coefficient per beam
    pub k0: Vec<f64>,

    /// Torsion-coupled coefficient per beam
    pub k1: Vec<f64>,

    /// Interpolated coefficient per beam
    pub k: Vec<f64>,
}

/// Beam-indexed table of coefficients, one column per load item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTable {
    /// Load family of the columns
    pub family: LoadFamily,

    /// Row keys: beam eccentricities (m)
    pub beam_eccentricities_m: Vec<f64>,

    /// One column per load item, in load order
    pub columns: Vec<LoadColumn>,
}

impl CoefficientTable {
    /// Interpolated coefficient `k` for a beam (row) and load (column)
    pub fn coefficient(&self, beam: usize, load: usize) -> Option<f64> {
        self.columns.get(load).and_then(|column| column.k.get(beam).copied())
    }

    /// Rows of `k`, one per beam, one value per load
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.beam_eccentricities_m.len())
            .map(|beam| self.columns.iter().map(|column| column.k[beam]).collect())
            .collect()
    }
}

/// Results from the GMB distribution of a traffic configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GmbResult {
    /// Plate parameters the coefficients were computed with
    pub parameters: GrillageParameters,

    /// Wheel loads
    pub concentrated: CoefficientTable,

    /// Lane loads
    pub distributed: CoefficientTable,
}

impl GmbResult {
    /// Flexural parameter θ
    pub fn theta(&self) -> f64 {
        self.parameters.theta
    }

    /// Torsional parameter α
    pub fn alpha(&self) -> f64 {
        self.parameters.alpha
    }

    /// Beam position → k, one series per load item
    pub fn chart_series(&self) -> Vec<CoefficientSeries> {
        [&self.concentrated, &self.distributed]
            .into_iter()
            .flat_map(|table| {
                table.columns.iter().map(move |column| {
                    CoefficientSeries::new(column.label.as_str(), &table.beam_eccentricities_m, &column.k)
                })
            })
            .collect()
    }
}

fn coefficient_table(
    parameters: &GrillageParameters,
    beam_eccentricities_m: &[f64],
    group: &LoadGroup,
) -> CalcResult<CoefficientTable> {
    let mut columns = Vec::with_capacity(group.len());

    for (idx, load) in group.loads.iter().enumerate() {
        let label = format!("{}{}", group.family.label_prefix(), idx + 1);
        let mut column = LoadColumn {
            label,
            load_eccentricity_m: load.eccentricity_m,
            k0: Vec::with_capacity(beam_eccentricities_m.len()),
            k1: Vec::with_capacity(beam_eccentricities_m.len()),
            k: Vec::with_capacity(beam_eccentricities_m.len()),
        };

        for &y in beam_eccentricities_m {
            let influence = parameters.influence(y, load.eccentricity_m)?;
            log::trace!(
                "  {} on beam at {:+.2} m: k0 = {:.4}, k1 = {:.4}, k = {:.4}",
                column.label,
                y,
                influence.k0,
                influence.k1,
                influence.k
            );
            column.k0.push(influence.k0);
            column.k1.push(influence.k1);
            column.k.push(influence.k);
        }

        columns.push(column);
    }

    Ok(CoefficientTable {
        family: group.family,
        beam_eccentricities_m: beam_eccentricities_m.to_vec(),
        columns,
    })
}

/// Compute GMB coefficients for every load item on every beam.
///
/// # Errors
///
/// * `InvalidConfiguration` - fewer than 2 beams
/// * `InvalidInput` - missing beam length or diaphragm spacing, invalid stiffness
/// * `NumericOverflow` - a coefficient cannot be represented
pub fn calculate(
    section: &CrossSection,
    traffic: &TrafficLoadConfiguration,
    stiffness: &StiffnessProperties,
) -> CalcResult<GmbResult> {
    traffic.validate()?;
    let parameters = GrillageParameters::new(section, stiffness)?;
    let beams = section.beam_eccentricities()?;

    let concentrated_group = traffic.concentrated_loads();
    let distributed_group = traffic.distributed_loads();
    warn_loads_outside_carriageway(section, &concentrated_group);
    warn_loads_outside_carriageway(section, &distributed_group);

    let concentrated = coefficient_table(&parameters, &beams, &concentrated_group)?;
    let distributed = coefficient_table(&parameters, &beams, &distributed_group)?;

    Ok(GmbResult {
        parameters,
        concentrated,
        distributed,
    })
}
