//! Surveillance dashboard aggregates
//!
//! Summary statistics computed from the reference tables rather than stored
//! alongside them, so they cannot drift from the underlying data.

use crate::algorithm::scoring::round1;
use crate::data::ReferenceData;
use crate::models::types::Region;
use itertools::Itertools;

/// One summary row per region
#[derive(Debug, Clone)]
pub struct RegionSummaryRow {
    /// The region this row describes
    pub region: Region,
    /// Total estimated cases across member countries
    pub cases: u64,
    /// Average observed resistance (percent)
    pub resistance: f64,
}

/// Aggregate surveillance statistics
#[derive(Debug, Clone)]
pub struct SurveillanceSummary {
    /// Countries under surveillance
    pub total_countries: usize,
    /// Countries classified high or critical
    pub high_resistance_countries: usize,
    /// Mean treatment efficacy across countries (percent, one decimal)
    pub avg_efficacy: f64,
    /// Active surveillance sites across regions
    pub surveillance_sites: u32,
    /// Per-region case and resistance rows, by case count descending
    pub regions: Vec<RegionSummaryRow>,
}

impl SurveillanceSummary {
    /// Compute the summary from the reference tables
    #[must_use]
    pub fn compute(data: &ReferenceData) -> Self {
        let total_countries = data.countries.len();
        let high_resistance_countries = data
            .countries
            .iter()
            .filter(|c| c.resistance_level.is_elevated())
            .count();

        let avg_efficacy = if total_countries == 0 {
            0.0
        } else {
            round1(
                data.countries.iter().map(|c| c.efficacy_rate).sum::<f64>()
                    / total_countries as f64,
            )
        };

        let regions = data
            .regions
            .iter()
            .map(|profile| RegionSummaryRow {
                region: profile.region,
                cases: profile.total_cases,
                resistance: profile.avg_resistance,
            })
            .sorted_by_key(|row| std::cmp::Reverse(row.cases))
            .collect();

        Self {
            total_countries,
            high_resistance_countries,
            avg_efficacy,
            surveillance_sites: data.regions.iter().map(|r| r.surveillance_sites).sum(),
            regions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_bundled_data() {
        let data = ReferenceData::bundled();
        let summary = SurveillanceSummary::compute(&data);

        assert_eq!(summary.total_countries, 20);
        // UG, KE, RW, ER, CD, AO are high; none critical in the bundle
        assert_eq!(summary.high_resistance_countries, 6);
        assert_eq!(summary.surveillance_sites, 163);
        assert_eq!(summary.regions.len(), 4);
        // West Africa carries the largest case burden
        assert_eq!(summary.regions[0].region, Region::West);
        assert!(summary.avg_efficacy > 85.0 && summary.avg_efficacy < 100.0);
    }

    #[test]
    fn test_empty_dataset() {
        let data = ReferenceData::from_tables(Vec::new(), Vec::new(), Vec::new(), Vec::new());
        let summary = SurveillanceSummary::compute(&data);
        assert_eq!(summary.total_countries, 0);
        assert_eq!(summary.avg_efficacy, 0.0);
        assert!(summary.regions.is_empty());
    }
}
