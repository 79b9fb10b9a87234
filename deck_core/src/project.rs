//! # Deck Study Container
//!
//! A `DeckProject` bundles one deck cross-section with the traffic load cases
//! studied on it and the distribution theory they are analyzed with. Projects
//! serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! DeckProject
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: AnalysisSettings (distribution theory)
//! ├── section: CrossSection
//! └── load_cases: Vec<LoadCase> (uuid-identified traffic configurations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use deck_core::cross_section::CrossSection;
//! use deck_core::loads::{TrafficLoadConfiguration, Vehicle};
//! use deck_core::project::DeckProject;
//!
//! let section = CrossSection::new(11.28, 3, 3.76);
//! let mut project = DeckProject::new("Jane Engineer", "25-042", "County Roads", section);
//!
//! let truck = Vehicle::from_lists(3.5, vec![50.0, 50.0], vec![2.0])
//!     .unwrap()
//!     .with_distributed_load(9.0);
//! let traffic = TrafficLoadConfiguration::new(vec![truck], vec![-3.5]).unwrap();
//! let id = project.add_load_case("Edge lane", traffic);
//!
//! let outcome = project.analyze(&id).unwrap();
//! let json = project.to_json().unwrap();
//! assert!(json.contains("Edge lane"));
//! # let _ = outcome;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{self, DistributionOutcome, DistributionTheory};
use crate::cross_section::CrossSection;
use crate::errors::{CalcError, CalcResult};
use crate::loads::TrafficLoadConfiguration;

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root study container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckProject {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Analysis settings shared by all load cases
    pub settings: AnalysisSettings,

    /// The deck being studied
    pub section: CrossSection,

    /// Traffic load cases, in insertion order
    pub load_cases: Vec<LoadCase>,
}

impl DeckProject {
    /// Create a project with no load cases, analyzed with Courbon by default.
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
        section: CrossSection,
    ) -> Self {
        let now = Utc::now();
        DeckProject {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: AnalysisSettings::default(),
            section,
            load_cases: Vec::new(),
        }
    }

    /// Select the distribution theory and return self (builder pattern)
    pub fn with_theory(mut self, theory: DistributionTheory) -> Self {
        self.settings.theory = theory;
        self
    }

    /// Add a load case. Returns the UUID assigned to it.
    pub fn add_load_case(&mut self, name: impl Into<String>, traffic: TrafficLoadConfiguration) -> Uuid {
        let id = Uuid::new_v4();
        self.load_cases.push(LoadCase {
            id,
            name: name.into(),
            traffic,
        });
        self.touch();
        id
    }

    /// Remove a load case by UUID.
    ///
    /// Returns the removed case if it existed.
    pub fn remove_load_case(&mut self, id: &Uuid) -> Option<LoadCase> {
        let idx = self.load_cases.iter().position(|case| case.id == *id)?;
        let case = self.load_cases.remove(idx);
        self.touch();
        Some(case)
    }

    /// Get a load case by UUID.
    pub fn load_case(&self, id: &Uuid) -> Option<&LoadCase> {
        self.load_cases.iter().find(|case| case.id == *id)
    }

    /// Analyze one load case with the project theory.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an unknown id, otherwise whatever the theory reports.
    pub fn analyze(&self, id: &Uuid) -> CalcResult<DistributionOutcome> {
        let case = self.load_case(id).ok_or_else(|| {
            CalcError::invalid_input("load_case_id", id.to_string(), "No load case with this id")
        })?;
        log::info!("Analyzing load case '{}' with {}", case.name, self.settings.theory);
        calculations::calculate(&self.section, &case.traffic, &self.settings.theory)
    }

    /// Analyze every load case, in order. A failing case does not stop the others.
    pub fn analyze_all(&self) -> Vec<(Uuid, CalcResult<DistributionOutcome>)> {
        self.load_cases
            .iter()
            .map(|case| (case.id, self.analyze(&case.id)))
            .collect()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of load cases
    pub fn load_case_count(&self) -> usize {
        self.load_cases.len()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a project and check its schema version.
    ///
    /// # Errors
    ///
    /// * `SerializationError` - malformed JSON
    /// * `InvalidInput` - schema version differs from [`SCHEMA_VERSION`]
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let project: DeckProject = serde_json::from_str(json)?;
        if project.meta.version != SCHEMA_VERSION {
            return Err(CalcError::invalid_input(
                "meta.version",
                project.meta.version,
                format!("Unsupported schema version, expected {}", SCHEMA_VERSION),
            ));
        }
        log::debug!(
            "Loaded project '{}' with {} load case(s)",
            project.meta.job_id,
            project.load_cases.len()
        );
        Ok(project)
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Analysis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Theory used for every load case
    pub theory: DistributionTheory,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            theory: DistributionTheory::Courbon,
        }
    }
}

/// A named traffic configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Stable identifier
    pub id: Uuid,

    /// User-provided label
    pub name: String,

    /// Vehicles and their positions
    pub traffic: TrafficLoadConfiguration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::StiffnessProperties;
    use crate::loads::Vehicle;

    fn section() -> CrossSection {
        CrossSection::new(11.28, 3, 3.76)
            .with_beam_length(30.0)
            .with_diaphragms(3, 7.5)
    }

    fn edge_lane() -> TrafficLoadConfiguration {
        let truck = Vehicle::from_lists(3.5, vec![50.0, 50.0], vec![2.0])
            .unwrap()
            .with_distributed_load(9.0);
        TrafficLoadConfiguration::new(vec![truck], vec![-3.5]).unwrap()
    }

    #[test]
    fn test_project_creation() {
        let project = DeckProject::new("John Doe", "25-001", "Acme Corp", section());
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.settings.theory, DistributionTheory::Courbon);
        assert_eq!(project.load_case_count(), 0);
    }

    #[test]
    fn test_add_remove_load_case() {
        let mut project = DeckProject::new("Engineer", "25-001", "Client", section());
        let first = project.add_load_case("Edge lane", edge_lane());
        let second = project.add_load_case("Empty", TrafficLoadConfiguration::default());
        assert_eq!(project.load_case_count(), 2);
        assert_eq!(project.load_case(&first).map(|c| c.name.as_str()), Some("Edge lane"));

        let removed = project.remove_load_case(&first).unwrap();
        assert_eq!(removed.id, first);
        assert!(project.remove_load_case(&first).is_none());
        assert_eq!(project.load_cases[0].id, second);
    }

    #[test]
    fn test_analyze_unknown_case() {
        let project = DeckProject::new("Engineer", "25-001", "Client", section());
        let err = project.analyze(&Uuid::new_v4()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_analyze_all_keeps_going() {
        let mut project = DeckProject::new("Engineer", "25-001", "Client", section());
        let good = project.add_load_case("Edge lane", edge_lane());
        let empty = project.add_load_case("Empty", TrafficLoadConfiguration::default());

        let results = project.analyze_all();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, good);
        assert!(matches!(results[0].1, Ok(DistributionOutcome::Courbon(_))));
        assert_eq!(results[1].0, empty);
        assert_eq!(
            results[1].1.as_ref().unwrap_err().error_code(),
            "DEGENERATE_LOAD_SET"
        );
    }

    #[test]
    fn test_gmb_project() {
        let stiffness = StiffnessProperties {
            beam_elastic_modulus_kn_m2: 35.0e6,
            diaphragm_elastic_modulus_kn_m2: 35.0e6,
            slab_elastic_modulus_kn_m2: 33.0e6,
            poisson_ratio: 0.2,
            beam_inertia_m4: 0.5,
            diaphragm_inertia_m4: 0.1,
            beam_torsional_inertia_m4: 0.05,
            diaphragm_torsional_inertia_m4: 0.02,
        };
        let mut project = DeckProject::new("Engineer", "25-001", "Client", section())
            .with_theory(DistributionTheory::Gmb(stiffness));
        let id = project.add_load_case("Edge lane", edge_lane());
        assert!(matches!(project.analyze(&id), Ok(DistributionOutcome::Gmb(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut project = DeckProject::new("Jane Engineer", "25-042", "Test Client", section());
        project.add_load_case("Edge lane", edge_lane());

        let json = project.to_json().unwrap();
        assert!(json.contains("Jane Engineer"));
        assert!(json.contains(r#""theory": "Courbon""#));

        let roundtrip = DeckProject::from_json(&json).unwrap();
        assert_eq!(roundtrip, project);
    }

    #[test]
    fn test_from_json_errors() {
        let err = DeckProject::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let mut project = DeckProject::new("Engineer", "25-001", "Client", section());
        project.meta.version = "9.9.9".to_string();
        let json = project.to_json().unwrap();
        let err = DeckProject::from_json(&json).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "meta.version"));
    }
}
