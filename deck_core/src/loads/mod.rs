//! Traffic loads acting transversally on the deck
//!
//! Vehicles are placed across the carriageway and flattened into two load
//! groups that the distribution theories consume.
//!
//! # Overview
//!
//! - [`Vehicle`] - Width, wheel-line loads and distributed intensity of one vehicle
//! - [`TrafficLoadConfiguration`] - Vehicles placed at eccentricities on the deck
//! - [`LoadGroup`] - A flat list of (weight, eccentricity) pairs for one [`LoadFamily`]
//!
//! # Example
//!
//! ```
//! use deck_core::loads::{TrafficLoadConfiguration, Vehicle};
//!
//! let tandem = Vehicle::from_lists(3.0, vec![200.0, 200.0], vec![2.0])
//!     .unwrap()
//!     .with_distributed_load(9.0);
//! let traffic = TrafficLoadConfiguration::new(vec![tandem], vec![-1.0]).unwrap();
//!
//! let concentrated = traffic.concentrated_loads();
//! assert_eq!(concentrated.weights(), vec![200.0, 200.0]);
//! assert_eq!(concentrated.eccentricities(), vec![-2.0, 0.0]);
//!
//! let distributed = traffic.distributed_loads();
//! assert_eq!(distributed.weights(), vec![27.0]);
//! ```

pub mod load_types;
pub mod traffic;
pub mod vehicle;

pub use load_types::LoadFamily;
pub use traffic::{PlacedVehicle, TrafficLoadConfiguration};
pub use vehicle::{ConcentratedLoad, Vehicle};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A single resultant load at a transverse position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load weight (kN for wheel loads, kN/m for lane loads)
    pub weight_kn: f64,

    /// Signed distance from the deck centerline (m)
    pub eccentricity_m: f64,
}

/// Flattened view of one load family across all vehicles.
///
/// Ordering follows the vehicle order, then the order within each vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadGroup {
    /// Which family these loads belong to
    pub family: LoadFamily,

    /// The individual loads
    pub loads: Vec<PointLoad>,
}

impl LoadGroup {
    /// Create a group from its loads
    pub fn new(family: LoadFamily, loads: Vec<PointLoad>) -> Self {
        LoadGroup { family, loads }
    }

    /// Load weights in order
    pub fn weights(&self) -> Vec<f64> {
        self.loads.iter().map(|l| l.weight_kn).collect()
    }

    /// Load eccentricities in order
    pub fn eccentricities(&self) -> Vec<f64> {
        self.loads.iter().map(|l| l.eccentricity_m).collect()
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> f64 {
        self.loads.iter().map(|l| l.weight_kn).sum()
    }

    /// Sum of weight × eccentricity (moment about the centerline)
    pub fn first_moment(&self) -> f64 {
        self.loads.iter().map(|l| l.weight_kn * l.eccentricity_m).sum()
    }

    /// Weight-averaged eccentricity of the group.
    ///
    /// # Errors
    ///
    /// `DegenerateLoadSet` when the weights sum to zero (including an empty group).
    pub fn resultant_eccentricity(&self) -> CalcResult<f64> {
        let total = self.total_weight();
        if total == 0.0 || !total.is_finite() {
            return Err(CalcError::degenerate_load_set(self.family.code()));
        }
        Ok(self.first_moment() / total)
    }

    /// Number of loads in the group
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Check if the group holds no loads
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(pairs: &[(f64, f64)]) -> LoadGroup {
        LoadGroup::new(
            LoadFamily::Concentrated,
            pairs
                .iter()
                .map(|&(weight_kn, eccentricity_m)| PointLoad {
                    weight_kn,
                    eccentricity_m,
                })
                .collect(),
        )
    }

    #[test]
    fn test_resultant_eccentricity() {
        let g = group(&[(200.0, -2.0), (200.0, 0.0), (100.0, -5.5), (100.0, -3.5)]);
        assert_eq!(g.total_weight(), 600.0);
        // (-400 + 0 - 550 - 350) / 600
        assert!((g.resultant_eccentricity().unwrap() - (-1300.0 / 600.0)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weight_is_degenerate() {
        let g = group(&[(0.0, -1.0), (0.0, -4.5)]);
        let err = g.resultant_eccentricity().unwrap_err();
        assert_eq!(err, CalcError::degenerate_load_set("concentrated"));
    }

    #[test]
    fn test_empty_group_is_degenerate() {
        let g = group(&[]);
        assert!(g.is_empty());
        assert!(g.resultant_eccentricity().is_err());
    }

    #[test]
    fn test_cancelling_weights_are_degenerate() {
        // Uplift and downward loads summing to zero still leave no resultant position
        let g = group(&[(10.0, 1.0), (-10.0, 2.0)]);
        assert!(g.resultant_eccentricity().is_err());
    }
}
