//! Vehicle definition
//!
//! A vehicle is described in the transverse direction only: its width, the
//! wheel-line loads it applies (each at an offset from the vehicle's own
//! centerline) and an optional uniformly distributed intensity over its width.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// One concentrated (wheel-line) load of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcentratedLoad {
    /// Load magnitude (kN)
    pub magnitude_kn: f64,

    /// Offset from the vehicle centerline (m), negative to the left
    pub offset_m: f64,
}

impl ConcentratedLoad {
    /// Create a concentrated load at an offset from the vehicle centerline
    pub fn new(magnitude_kn: f64, offset_m: f64) -> Self {
        ConcentratedLoad {
            magnitude_kn,
            offset_m,
        }
    }
}

/// A vehicle as seen in the deck cross-section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_m": 3.0,
///   "concentrated_loads": [
///     { "magnitude_kn": 150.0, "offset_m": -1.0 },
///     { "magnitude_kn": 150.0, "offset_m": 1.0 }
///   ],
///   "distributed_load_kn_m2": 9.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Transverse width of the vehicle (m)
    pub width_m: f64,

    /// Wheel-line loads, left to right
    pub concentrated_loads: Vec<ConcentratedLoad>,

    /// Uniformly distributed intensity over the vehicle width (kN/m²)
    #[serde(default)]
    pub distributed_load_kn_m2: f64,
}

impl Vehicle {
    /// Create a vehicle from load records; no distributed load.
    pub fn new(width_m: f64, concentrated_loads: Vec<ConcentratedLoad>) -> Self {
        Vehicle {
            width_m,
            concentrated_loads,
            distributed_load_kn_m2: 0.0,
        }
    }

    /// Create a vehicle from a list of magnitudes and a list of spacings.
    ///
    /// Two layouts are accepted:
    ///
    /// * equal lengths - each spacing is the offset of the matching load from
    ///   the vehicle centerline;
    /// * one spacing fewer than magnitudes - spacings are the gaps between
    ///   consecutive loads, and the loads are centered on the vehicle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deck_core::loads::Vehicle;
    ///
    /// // Two wheel lines 2.00 m apart, centered on the vehicle
    /// let v = Vehicle::from_lists(3.0, vec![150.0, 150.0], vec![2.0]).unwrap();
    /// assert_eq!(v.concentrated_loads[0].offset_m, -1.0);
    /// assert_eq!(v.concentrated_loads[1].offset_m, 1.0);
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidInput` for any other length combination, or a negative width.
    pub fn from_lists(width_m: f64, magnitudes_kn: Vec<f64>, spacings_m: Vec<f64>) -> CalcResult<Self> {
        let offsets = if spacings_m.len() == magnitudes_kn.len() {
            spacings_m
        } else if spacings_m.len() + 1 == magnitudes_kn.len() {
            let spread: f64 = spacings_m.iter().sum();
            let mut offsets = Vec::with_capacity(magnitudes_kn.len());
            let mut position = -spread / 2.0;
            offsets.push(position);
            for gap in &spacings_m {
                position += gap;
                offsets.push(position);
            }
            offsets
        } else {
            return Err(CalcError::invalid_input(
                "spacings_m",
                format!("{} spacings for {} loads", spacings_m.len(), magnitudes_kn.len()),
                "Give one offset per load, or one gap between each pair of consecutive loads",
            ));
        };

        let loads = magnitudes_kn
            .into_iter()
            .zip(offsets)
            .map(|(magnitude_kn, offset_m)| ConcentratedLoad::new(magnitude_kn, offset_m))
            .collect();

        let vehicle = Vehicle::new(width_m, loads);
        vehicle.validate()?;
        Ok(vehicle)
    }

    /// Set the distributed intensity and return self (builder pattern)
    pub fn with_distributed_load(mut self, intensity_kn_m2: f64) -> Self {
        self.distributed_load_kn_m2 = intensity_kn_m2;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.width_m < 0.0 || !self.width_m.is_finite() {
            return Err(CalcError::invalid_input(
                "width_m",
                self.width_m.to_string(),
                "Vehicle width cannot be negative",
            ));
        }
        if !self.distributed_load_kn_m2.is_finite() {
            return Err(CalcError::invalid_input(
                "distributed_load_kn_m2",
                self.distributed_load_kn_m2.to_string(),
                "Distributed load must be a finite number",
            ));
        }
        for load in &self.concentrated_loads {
            if !load.magnitude_kn.is_finite() || !load.offset_m.is_finite() {
                return Err(CalcError::invalid_input(
                    "concentrated_loads",
                    format!("{} kN at {} m", load.magnitude_kn, load.offset_m),
                    "Load magnitude and offset must be finite numbers",
                ));
            }
        }
        Ok(())
    }

    /// Distributed load carried over the vehicle width (kN/m)
    pub fn distributed_weight_kn(&self) -> f64 {
        self.width_m * self.distributed_load_kn_m2
    }

    /// Sum of the concentrated loads (kN)
    pub fn total_concentrated_kn(&self) -> f64 {
        self.concentrated_loads.iter().map(|l| l.magnitude_kn).sum()
    }
}
