//! Common domain type definitions
//!
//! This module contains common enum types used across the surveillance domain
//! models to ensure consistency and facilitate code reuse.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Surveillance region of Sub-Saharan Africa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// East Africa
    East,
    /// West Africa
    West,
    /// Central Africa
    Central,
    /// Southern Africa
    South,
}

impl Region {
    /// All defined regions, in canonical order
    pub const ALL: [Self; 4] = [Self::East, Self::West, Self::Central, Self::South];

    /// Stable identifier used on the wire and in reference data
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::West => "west",
            Self::Central => "central",
            Self::South => "south",
        }
    }

    /// Human-readable display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "East Africa",
            Self::West => "West Africa",
            Self::Central => "Central Africa",
            Self::South => "Southern Africa",
        }
    }

    /// Parse a region from its wire identifier
    #[must_use]
    pub fn from_id(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            "central" => Some(Self::Central),
            "south" | "southern" => Some(Self::South),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ordinal classification of a country's observed treatment-failure burden
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResistanceLevel {
    /// Low resistance burden
    Low,
    /// Medium resistance burden
    Medium,
    /// High resistance burden
    High,
    /// Critical resistance burden
    Critical,
}

impl ResistanceLevel {
    /// Probability increment (percentage points) this level contributes
    /// to the heuristic resistance score
    #[must_use]
    pub const fn score_increment(self) -> f64 {
        match self {
            Self::Low => 5.0,
            Self::Medium => 15.0,
            Self::High => 25.0,
            Self::Critical => 35.0,
        }
    }

    /// Whether this level marks a high-resistance environment
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }

    /// Get a descriptive name for this level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl From<&str> for ResistanceLevel {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl fmt::Display for ResistanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Categorical risk level attached to a prediction result
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Probability below 30
    Low,
    /// Probability in [30, 50)
    Moderate,
    /// Probability in [50, 70)
    High,
    /// Probability of 70 or above
    Critical,
}

impl RiskLevel {
    /// Derive the risk level from a resistance probability (percentage)
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 70.0 {
            Self::Critical
        } else if probability >= 50.0 {
            Self::High
        } else if probability >= 30.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        };
        write!(f, "{label}")
    }
}

/// Therapeutic classification of an antimalarial drug
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrugClass {
    /// Artemisinin-based combination therapy
    Act,
    /// Non-artemisinin combination therapy
    NonAct,
    /// Single-compound therapy
    Monotherapy,
}

impl From<&str> for DrugClass {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "act" => Self::Act,
            "monotherapy" => Self::Monotherapy,
            _ => Self::NonAct,
        }
    }
}

impl fmt::Display for DrugClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Act => "ACT",
            Self::NonAct => "Non-ACT",
            Self::Monotherapy => "Monotherapy",
        };
        write!(f, "{label}")
    }
}

/// Direction of an observed or projected time trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Value is rising over time
    Increasing,
    /// No meaningful change over time
    Stable,
    /// Value is falling over time
    Decreasing,
}

impl From<&str> for Trend {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "increasing" => Self::Increasing,
            "decreasing" => Self::Decreasing,
            _ => Self::Stable,
        }
    }
}

/// Evidence classification of a molecular-marker observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSignificance {
    /// WHO-validated resistance association
    Validated,
    /// Candidate marker, association not yet validated
    Candidate,
}

impl From<&str> for MarkerSignificance {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "validated" => Self::Validated,
            _ => Self::Candidate,
        }
    }
}

/// Drug family a molecular marker confers resistance against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCategory {
    /// Artemisinin partial-resistance markers (Pfkelch13)
    Artemisinin,
    /// Partner-drug resistance markers (Pfcrt, Pfmdr1, Pfplasmepsin)
    PartnerDrug,
    /// Sulfadoxine-Pyrimethamine markers (Pfdhfr, Pfdhps)
    Sp,
}

impl fmt::Display for MarkerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Artemisinin => "Artemisinin",
            Self::PartnerDrug => "Partner Drug",
            Self::Sp => "SP",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_roundtrip() {
        for region in Region::ALL {
            assert_eq!(Region::from_id(region.id()), Some(region));
        }
        assert_eq!(Region::from_id("nowhere"), None);
    }

    #[test]
    fn test_resistance_level_ordering() {
        assert!(ResistanceLevel::Low < ResistanceLevel::Medium);
        assert!(ResistanceLevel::High < ResistanceLevel::Critical);
        assert!(ResistanceLevel::Critical.is_elevated());
        assert!(!ResistanceLevel::Medium.is_elevated());
    }

    #[test]
    fn test_resistance_level_increments() {
        assert_eq!(ResistanceLevel::Low.score_increment(), 5.0);
        assert_eq!(ResistanceLevel::Medium.score_increment(), 15.0);
        assert_eq!(ResistanceLevel::High.score_increment(), 25.0);
        assert_eq!(ResistanceLevel::Critical.score_increment(), 35.0);
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_probability(5.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(29.9), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(30.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(50.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(69.9), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(70.0), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_probability(95.0), RiskLevel::Critical);
    }

    #[test]
    fn test_parse_fallbacks() {
        assert_eq!(ResistanceLevel::from("unheard-of"), ResistanceLevel::Low);
        assert_eq!(DrugClass::from("ACT"), DrugClass::Act);
        assert_eq!(DrugClass::from("Non-ACT"), DrugClass::NonAct);
        assert_eq!(Trend::from("increasing"), Trend::Increasing);
        assert_eq!(Trend::from("flat"), Trend::Stable);
    }
}
