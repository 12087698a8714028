//! Molecular-marker catalog entry model

use crate::models::types::MarkerCategory;

/// Catalog entry for a known resistance-associated molecular marker
#[derive(Debug, Clone)]
pub struct MarkerDescriptor {
    /// Marker name, gene plus mutation, e.g. "Pfcrt K76T"
    pub name: String,
    /// Short description of the resistance association
    pub description: String,
    /// Drug family the marker confers resistance against
    pub category: MarkerCategory,
}

impl MarkerDescriptor {
    /// Create a new catalog entry
    #[must_use]
    pub fn new(name: &str, description: &str, category: MarkerCategory) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            category,
        }
    }

    /// Gene portion of the marker name ("Pfcrt K76T" -> "Pfcrt")
    #[must_use]
    pub fn gene(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_extraction() {
        let marker = MarkerDescriptor::new(
            "Pfkelch13 R561H",
            "Validated artemisinin resistance marker",
            MarkerCategory::Artemisinin,
        );
        assert_eq!(marker.gene(), "Pfkelch13");
    }
}
