//! Traffic load configuration
//!
//! Places vehicles across the deck and flattens them into the concentrated
//! and distributed load groups consumed by the distribution theories. The
//! flattened views are computed on demand, never stored.

use serde::{Deserialize, Serialize};

use super::load_types::LoadFamily;
use super::vehicle::Vehicle;
use super::{LoadGroup, PointLoad};
use crate::errors::{CalcError, CalcResult};
use crate::rounding::round_to;

/// A vehicle together with its position on the deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedVehicle {
    /// The vehicle
    pub vehicle: Vehicle,

    /// Offset of the vehicle centerline from the deck centerline (m)
    pub eccentricity_m: f64,
}

/// An ordered set of vehicles placed across the deck.
///
/// ## JSON Example
///
/// ```json
/// {
///   "vehicles": [
///     {
///       "vehicle": { "width_m": 3.0, "concentrated_loads": [], "distributed_load_kn_m2": 9.0 },
///       "eccentricity_m": -1.0
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficLoadConfiguration {
    /// Placed vehicles, in order
    pub vehicles: Vec<PlacedVehicle>,
}

impl TrafficLoadConfiguration {
    /// Pair a vehicle list with a matching list of eccentricities.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the two lists differ in length or a vehicle is invalid.
    pub fn new(vehicles: Vec<Vehicle>, eccentricities_m: Vec<f64>) -> CalcResult<Self> {
        if vehicles.len() != eccentricities_m.len() {
            return Err(CalcError::invalid_input(
                "eccentricities_m",
                format!("{} eccentricities for {} vehicles", eccentricities_m.len(), vehicles.len()),
                "Each vehicle needs exactly one eccentricity",
            ));
        }

        let config = TrafficLoadConfiguration {
            vehicles: vehicles
                .into_iter()
                .zip(eccentricities_m)
                .map(|(vehicle, eccentricity_m)| PlacedVehicle {
                    vehicle,
                    eccentricity_m,
                })
                .collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Add a vehicle and return self (builder pattern)
    pub fn with_vehicle(mut self, vehicle: Vehicle, eccentricity_m: f64) -> Self {
        self.vehicles.push(PlacedVehicle {
            vehicle,
            eccentricity_m,
        });
        self
    }

    /// Validate every placed vehicle.
    pub fn validate(&self) -> CalcResult<()> {
        for placed in &self.vehicles {
            placed.vehicle.validate()?;
            if !placed.eccentricity_m.is_finite() {
                return Err(CalcError::invalid_input(
                    "eccentricity_m",
                    placed.eccentricity_m.to_string(),
                    "Vehicle eccentricity must be a finite number",
                ));
            }
        }
        Ok(())
    }

    /// Every wheel load with its absolute eccentricity (rounded to 2 decimals).
    ///
    /// Ordered by vehicle, then by load within the vehicle.
    pub fn concentrated_loads(&self) -> LoadGroup {
        let loads = self
            .vehicles
            .iter()
            .flat_map(|placed| {
                placed.vehicle.concentrated_loads.iter().map(move |load| PointLoad {
                    weight_kn: load.magnitude_kn,
                    eccentricity_m: round_to(load.offset_m + placed.eccentricity_m, 2),
                })
            })
            .collect();
        LoadGroup::new(LoadFamily::Concentrated, loads)
    }

    /// One lane load per vehicle: width × intensity at the vehicle centerline.
    ///
    /// Vehicles without distributed load contribute zero-weight entries.
    pub fn distributed_loads(&self) -> LoadGroup {
        let loads = self
            .vehicles
            .iter()
            .map(|placed| PointLoad {
                weight_kn: placed.vehicle.distributed_weight_kn(),
                eccentricity_m: placed.eccentricity_m,
            })
            .collect();
        LoadGroup::new(LoadFamily::Distributed, loads)
    }

    /// Flattened group for the requested family
    pub fn load_group(&self, family: LoadFamily) -> LoadGroup {
        match family {
            LoadFamily::Concentrated => self.concentrated_loads(),
            LoadFamily::Distributed => self.distributed_loads(),
        }
    }

    /// Number of placed vehicles
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_vec(actual: &[f64], expected: &[f64]) -> bool {
        actual.len() == expected.len()
            && actual.iter().zip(expected).all(|(a, e)| (a - e).abs() < 1e-9)
    }

    fn two_lanes() -> TrafficLoadConfiguration {
        let vehicle1 = Vehicle::from_lists(3.00, vec![200.0, 200.0], vec![2.00])
            .unwrap()
            .with_distributed_load(9.0);
        let vehicle2 = Vehicle::from_lists(3.00, vec![100.0, 100.0], vec![2.00])
            .unwrap()
            .with_distributed_load(2.5);
        TrafficLoadConfiguration::new(vec![vehicle1, vehicle2], vec![-1.00, -4.50]).unwrap()
    }

    #[test]
    fn test_concentrated_view() {
        let conc = two_lanes().concentrated_loads();
        assert_eq!(conc.family, LoadFamily::Concentrated);
        assert!(approx_vec(&conc.weights(), &[200.0, 200.0, 100.0, 100.0]));
        assert!(approx_vec(&conc.eccentricities(), &[-2.00, 0.00, -5.50, -3.50]));
    }

    #[test]
    fn test_distributed_view() {
        let dist = two_lanes().distributed_loads();
        assert!(approx_vec(&dist.weights(), &[27.00, 7.50]));
        assert!(approx_vec(&dist.eccentricities(), &[-1.00, -4.50]));
    }

    #[test]
    fn test_zero_intensity_entries_kept() {
        let v = Vehicle::from_lists(3.5, vec![1.0], vec![0.0]).unwrap();
        let config = TrafficLoadConfiguration::new(vec![v.clone(), v], vec![-3.5, 2.0]).unwrap();
        let dist = config.distributed_loads();
        assert_eq!(dist.len(), 2);
        assert_eq!(dist.total_weight(), 0.0);
    }

    #[test]
    fn test_eccentricities_rounded() {
        let v = Vehicle::new(2.0, vec![crate::loads::ConcentratedLoad::new(10.0, 0.333)]);
        let config = TrafficLoadConfiguration::default().with_vehicle(v, 1.0);
        assert_eq!(config.concentrated_loads().eccentricities(), vec![1.33]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let v = Vehicle::from_lists(3.0, vec![100.0], vec![0.0]).unwrap();
        let err = TrafficLoadConfiguration::new(vec![v], vec![-1.0, 1.0]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_views_are_recomputed() {
        let config = two_lanes();
        assert_eq!(config.concentrated_loads(), config.load_group(LoadFamily::Concentrated));
        assert_eq!(config.distributed_loads(), config.distributed_loads());
        assert_eq!(config.vehicle_count(), 2);
    }
}
