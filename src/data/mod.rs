//! Bundled reference dataset
//!
//! The surveillance tables are immutable reference data: they are built once
//! at process start and passed by shared reference into the estimators. The
//! dataset is never mutated after construction, so it needs no locking.

mod countries;
mod drugs;
mod markers;
mod regions;

use crate::models::country::Country;
use crate::models::drug::Drug;
use crate::models::marker::MarkerDescriptor;
use crate::models::region::RegionProfile;
use crate::models::types::{MarkerCategory, Region};
use rustc_hash::FxHashMap;
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<Arc<ReferenceData>> = LazyLock::new(|| Arc::new(ReferenceData::bundled()));

/// The immutable surveillance reference tables
#[derive(Debug)]
pub struct ReferenceData {
    /// Country surveillance profiles
    pub countries: Vec<Country>,
    /// Antimalarial drug efficacy table
    pub drugs: Vec<Drug>,
    /// Regional aggregate profiles, one per defined region
    pub regions: Vec<RegionProfile>,
    /// Catalog of known molecular markers
    pub markers: Vec<MarkerDescriptor>,
    country_index: FxHashMap<String, usize>,
    drug_index: FxHashMap<String, usize>,
}

impl ReferenceData {
    /// Build the dataset bundled with the crate
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_tables(
            countries::countries(),
            drugs::drugs(),
            regions::regions(),
            markers::markers(),
        )
    }

    /// Build a dataset from caller-provided tables
    #[must_use]
    pub fn from_tables(
        countries: Vec<Country>,
        drugs: Vec<Drug>,
        regions: Vec<RegionProfile>,
        markers: Vec<MarkerDescriptor>,
    ) -> Self {
        let country_index = countries
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        let drug_index = drugs
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name.clone(), i))
            .collect();

        Self {
            countries,
            drugs,
            regions,
            markers,
            country_index,
            drug_index,
        }
    }

    /// Process-wide shared instance of the bundled dataset
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Look up a country by exact display name
    #[must_use]
    pub fn country_by_name(&self, name: &str) -> Option<&Country> {
        self.country_index.get(name).map(|&i| &self.countries[i])
    }

    /// Look up a drug by display name. Exact matches are resolved through
    /// the index; abbreviated names fall back to a prefix scan.
    #[must_use]
    pub fn drug_by_name(&self, name: &str) -> Option<&Drug> {
        if let Some(&i) = self.drug_index.get(name) {
            return Some(&self.drugs[i]);
        }
        self.drugs.iter().find(|d| d.matches_name(name))
    }

    /// Regional profile for a region
    #[must_use]
    pub fn region_profile(&self, region: Region) -> Option<&RegionProfile> {
        self.regions.iter().find(|r| r.region == region)
    }

    /// Countries classified under a region
    pub fn countries_in_region(&self, region: Region) -> impl Iterator<Item = &Country> {
        self.countries.iter().filter(move |c| c.region == region)
    }

    /// Catalog markers in a category
    pub fn markers_in_category(&self, category: MarkerCategory) -> impl Iterator<Item = &MarkerDescriptor> {
        self.markers.iter().filter(move |m| m.category == category)
    }

    /// Whether a marker name appears in the catalog
    #[must_use]
    pub fn is_known_marker(&self, name: &str) -> bool {
        self.markers.iter().any(|m| m.name == name)
    }
}
