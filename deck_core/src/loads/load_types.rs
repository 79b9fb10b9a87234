//! Load family definitions
//!
//! Traffic loads reach the deck either as concentrated wheel loads or as
//! uniformly distributed lane loads. Each family is distributed separately.

use serde::{Deserialize, Serialize};

/// The two families of traffic load.
///
/// # Example
/// ```
/// use deck_core::loads::LoadFamily;
///
/// assert_eq!(LoadFamily::Distributed.code(), "distributed");
/// assert_eq!(LoadFamily::Concentrated.to_string(), "Concentrated");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadFamily {
    /// Wheel (axle-line) loads at discrete transverse positions
    Concentrated,
    /// Lane loads: vehicle width × distributed intensity, at the vehicle centerline
    Distributed,
}

impl LoadFamily {
    /// Both families in reporting order
    pub const ALL: [LoadFamily; 2] = [LoadFamily::Concentrated, LoadFamily::Distributed];

    /// Lower-case code used in error messages and labels
    pub fn code(&self) -> &'static str {
        match self {
            LoadFamily::Concentrated => "concentrated",
            LoadFamily::Distributed => "distributed",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadFamily::Concentrated => "Concentrated",
            LoadFamily::Distributed => "Distributed",
        }
    }

    /// Prefix for per-load column labels ("Q1", "q2", ...)
    pub fn label_prefix(&self) -> &'static str {
        match self {
            LoadFamily::Concentrated => "Q",
            LoadFamily::Distributed => "q",
        }
    }
}

impl std::fmt::Display for LoadFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefixes_differ() {
        assert_ne!(
            LoadFamily::Concentrated.label_prefix(),
            LoadFamily::Distributed.label_prefix()
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadFamily::ALL).unwrap();
        assert_eq!(json, r#"["Concentrated","Distributed"]"#);
    }
}
