//! # deck_core - Bridge Deck Transverse Load Distribution
//!
//! `deck_core` computes how traffic loads placed across a multi-beam bridge
//! deck are shared between the longitudinal beams. All inputs and outputs are
//! JSON-serializable so the engine can sit behind a CLI, a GUI or a service.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use deck_core::calculations::courbon;
//! use deck_core::cross_section::CrossSection;
//! use deck_core::loads::{TrafficLoadConfiguration, Vehicle};
//!
//! let section = CrossSection::new(10.0, 4, 2.5);
//! let lane1 = Vehicle::from_lists(3.0, vec![200.0, 200.0], vec![2.0])
//!     .unwrap()
//!     .with_distributed_load(9.0);
//! let lane2 = Vehicle::from_lists(3.0, vec![100.0, 100.0], vec![2.0])
//!     .unwrap()
//!     .with_distributed_load(2.5);
//! let traffic = TrafficLoadConfiguration::new(vec![lane1, lane2], vec![-1.0, -4.5]).unwrap();
//!
//! let result = courbon::calculate(&section, &traffic).unwrap();
//! assert_eq!(result.concentrated.coefficients, vec![0.51, 0.337, 0.163, -0.01]);
//! ```
//!
//! ## Modules
//!
//! - [`cross_section`] - Deck geometry and beam positions
//! - [`loads`] - Vehicles, traffic configurations and flattened load groups
//! - [`calculations`] - Courbon, Engesser and GMB distribution theories
//! - [`plot`] - Coefficient chart series and the plotting seam
//! - [`project`] - Study container with load cases and JSON persistence
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod cross_section;
pub mod errors;
pub mod loads;
pub mod plot;
pub mod project;
pub mod rounding;

// Re-export commonly used types at crate root for convenience
pub use calculations::{DistributionOutcome, DistributionTheory};
pub use cross_section::CrossSection;
pub use errors::{CalcError, CalcResult};
pub use loads::{TrafficLoadConfiguration, Vehicle};
pub use project::{DeckProject, LoadCase};
