//! Regional surveillance profile model

use crate::models::types::Region;

/// Aggregate surveillance profile for one region
#[derive(Debug, Clone)]
pub struct RegionProfile {
    /// The region this profile describes
    pub region: Region,
    /// Display names of member countries under surveillance
    pub countries: Vec<String>,
    /// Display color used by downstream visualizations
    pub color: String,
    /// Total estimated cases across member countries
    pub total_cases: u64,
    /// Average observed resistance across member countries (percent)
    pub avg_resistance: f64,
    /// Number of active surveillance sites
    pub surveillance_sites: u32,
}

impl RegionProfile {
    /// Create a new regional profile
    #[must_use]
    pub fn new(
        region: Region,
        countries: &[&str],
        color: &str,
        total_cases: u64,
        avg_resistance: f64,
        surveillance_sites: u32,
    ) -> Self {
        Self {
            region,
            countries: countries.iter().map(|c| (*c).to_string()).collect(),
            color: color.to_string(),
            total_cases,
            avg_resistance,
            surveillance_sites,
        }
    }

    /// Display name of the region
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.region.name()
    }
}
