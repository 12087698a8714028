//! Antimalarial drug model
//!
//! Represents one antimalarial treatment with three trailing years of
//! therapeutic-efficacy data and the molecular markers associated with
//! reduced response to it.

use crate::models::types::DrugClass;

/// An antimalarial drug with trailing efficacy data
#[derive(Debug, Clone)]
pub struct Drug {
    /// Display name, e.g. "Artemether-Lumefantrine (AL)"
    pub name: String,
    /// Therapeutic classification
    pub class: DrugClass,
    /// Whether the drug is a WHO first-line recommendation
    pub first_line: bool,
    /// Therapeutic efficacy in 2021 (percent)
    pub efficacy_2021: f64,
    /// Therapeutic efficacy in 2022 (percent)
    pub efficacy_2022: f64,
    /// Therapeutic efficacy in 2023 (percent)
    pub efficacy_2023: f64,
    /// Names of molecular markers associated with reduced efficacy
    pub resistance_markers: Vec<String>,
}

impl Drug {
    /// Create a new drug record; `efficacy` is ordered oldest to newest
    /// (2021, 2022, 2023)
    #[must_use]
    pub fn new(name: &str, class: DrugClass, first_line: bool, efficacy: [f64; 3]) -> Self {
        Self {
            name: name.to_string(),
            class,
            first_line,
            efficacy_2021: efficacy[0],
            efficacy_2022: efficacy[1],
            efficacy_2023: efficacy[2],
            resistance_markers: Vec::new(),
        }
    }

    /// Attach associated resistance-marker names
    #[must_use]
    pub fn with_markers(mut self, markers: &[&str]) -> Self {
        self.resistance_markers = markers.iter().map(|m| (*m).to_string()).collect();
        self
    }

    /// Efficacy lost over the trailing three years (percentage points).
    /// Negative when efficacy improved.
    #[must_use]
    pub fn efficacy_decline(&self) -> f64 {
        self.efficacy_2021 - self.efficacy_2023
    }

    /// Check whether a name refers to this drug. Matching is by prefix so
    /// that abbreviated forms like "Artemether-Lumefantrine" resolve to
    /// "Artemether-Lumefantrine (AL)".
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        let name = name.trim();
        !name.is_empty() && (self.name == name || self.name.starts_with(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_drug() -> Drug {
        Drug::new(
            "Artemether-Lumefantrine (AL)",
            DrugClass::Act,
            true,
            [93.8, 92.5, 91.2],
        )
        .with_markers(&["Pfmdr1 N86", "Pfcrt K76"])
    }

    #[test]
    fn test_efficacy_decline() {
        let drug = create_test_drug();
        assert!((drug.efficacy_decline() - 2.6).abs() < 1e-9);
    }

    #[test]
    fn test_efficacy_decline_negative_when_improving() {
        let drug = Drug::new("Test", DrugClass::Monotherapy, false, [90.0, 91.0, 92.0]);
        assert!((drug.efficacy_decline() + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_name_matching() {
        let drug = create_test_drug();
        assert!(drug.matches_name("Artemether-Lumefantrine (AL)"));
        assert!(drug.matches_name("Artemether-Lumefantrine"));
        assert!(!drug.matches_name("Artesunate-Amodiaquine"));
        assert!(!drug.matches_name(""));
    }
}
