//! Country surveillance record model
//!
//! This module contains the `Country` model, representing one country's
//! drug-resistance surveillance profile: its regional classification,
//! resistance-level burden, treatment efficacy, and the molecular-marker
//! observations reported by its surveillance sites.

use crate::models::types::{MarkerSignificance, Region, ResistanceLevel, Trend};

/// A molecular-marker observation from national surveillance
#[derive(Debug, Clone)]
pub struct MarkerObservation {
    /// Marker name, e.g. "Pfkelch13 R561H"
    pub name: String,
    /// Observed prevalence among sampled infections (percent)
    pub prevalence: f64,
    /// Prevalence trend across recent surveys
    pub trend: Trend,
    /// Evidence classification of the resistance association
    pub significance: MarkerSignificance,
}

impl MarkerObservation {
    /// Create a new marker observation
    #[must_use]
    pub fn new(name: &str, prevalence: f64, trend: Trend, significance: MarkerSignificance) -> Self {
        Self {
            name: name.to_string(),
            prevalence,
            trend,
            significance,
        }
    }
}

/// One country's drug-resistance surveillance profile
#[derive(Debug, Clone)]
pub struct Country {
    /// ISO 3166-1 alpha-2 country code
    pub id: String,
    /// Display name used in requests and reports
    pub name: String,
    /// Surveillance region the country belongs to
    pub region: Region,
    /// Observed resistance-level classification
    pub resistance_level: ResistanceLevel,
    /// Current first-line treatment efficacy (percent)
    pub efficacy_rate: f64,
    /// Molecular markers reported by national surveillance
    pub markers: Vec<MarkerObservation>,
    /// Estimated malaria cases, 2023
    pub cases_2023: u64,
    /// Estimated malaria deaths, 2023
    pub deaths_2023: u64,
    /// National treatment-policy description
    pub treatment_policy: String,
    /// Year of the most recent therapeutic-efficacy survey
    pub last_survey: u16,
}

impl Country {
    /// Create a new country record without marker observations
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        name: &str,
        region: Region,
        resistance_level: ResistanceLevel,
        efficacy_rate: f64,
        cases_2023: u64,
        deaths_2023: u64,
        treatment_policy: &str,
        last_survey: u16,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            region,
            resistance_level,
            efficacy_rate,
            markers: Vec::new(),
            cases_2023,
            deaths_2023,
            treatment_policy: treatment_policy.to_string(),
            last_survey,
        }
    }

    /// Attach marker observations to this country record
    #[must_use]
    pub fn with_markers(mut self, markers: Vec<MarkerObservation>) -> Self {
        self.markers = markers;
        self
    }

    /// Check whether a marker has been observed in this country
    #[must_use]
    pub fn has_marker(&self, marker_name: &str) -> bool {
        self.markers.iter().any(|m| m.name == marker_name)
    }

    /// Prevalence of a marker in this country, if observed
    #[must_use]
    pub fn marker_prevalence(&self, marker_name: &str) -> Option<f64> {
        self.markers
            .iter()
            .find(|m| m.name == marker_name)
            .map(|m| m.prevalence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_country() -> Country {
        Country::new(
            "UG",
            "Uganda",
            Region::East,
            ResistanceLevel::High,
            87.5,
            13_800_000,
            4500,
            "Artemether-Lumefantrine (First-line)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new(
                "Pfkelch13 R561H",
                52.0,
                Trend::Increasing,
                MarkerSignificance::Validated,
            ),
            MarkerObservation::new(
                "Pfcrt K76T",
                38.0,
                Trend::Stable,
                MarkerSignificance::Validated,
            ),
        ])
    }

    #[test]
    fn test_country_creation() {
        let country = create_test_country();
        assert_eq!(country.id, "UG");
        assert_eq!(country.region, Region::East);
        assert_eq!(country.resistance_level, ResistanceLevel::High);
        assert_eq!(country.markers.len(), 2);
    }

    #[test]
    fn test_marker_lookup() {
        let country = create_test_country();
        assert!(country.has_marker("Pfkelch13 R561H"));
        assert!(!country.has_marker("Pfmdr1 N86Y"));
        assert_eq!(country.marker_prevalence("Pfcrt K76T"), Some(38.0));
        assert_eq!(country.marker_prevalence("Pfdhps K540E"), None);
    }
}
