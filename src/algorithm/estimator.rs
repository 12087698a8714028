//! Offline heuristic resistance estimator
//!
//! `LocalEstimator` wraps the deterministic scoring core with the two
//! presentation-layer jitter terms (confidence offset and geo-risk jitter)
//! and assembles the full prediction result. It has no failure path:
//! unmatched lookups degrade to policy defaults and the final clamp absorbs
//! pathological inputs.
//!
//! The jitter terms are the only non-deterministic element. They come from
//! an injectable random source so the estimator can be seeded in tests or
//! switched off entirely with [`LocalEstimator::deterministic`].

use crate::algorithm::scoring;
use crate::data::ReferenceData;
use crate::models::prediction::{
    GeoRiskEntry, PredictionOrigin, PredictionRequest, PredictionResult, TimelinePoint,
};
use chrono::Utc;
use itertools::Itertools;
use rand::Rng;

/// Number of points in the monthly projection
pub const TIMELINE_MONTHS: usize = 12;
/// Monthly escalation step (percentage points) for locally estimated results
pub const LOCAL_TIMELINE_STEP: f64 = 1.5;

/// Base of the synthetic confidence level
const CONFIDENCE_BASE: f64 = 85.0;
/// Width of the uniform confidence offset
const CONFIDENCE_SPREAD: f64 = 10.0;
/// Upper bound of the multiplicative geo-risk jitter
const GEO_JITTER_SPREAD: f64 = 0.3;

/// The local heuristic estimator
#[derive(Debug, Clone, Copy)]
pub struct LocalEstimator {
    jitter: bool,
}

impl LocalEstimator {
    /// Estimator with the jitter terms enabled (the shipped behavior)
    #[must_use]
    pub const fn new() -> Self {
        Self { jitter: true }
    }

    /// Estimator with the jitter terms disabled: confidence sits at the
    /// offset midpoint and geo risk uses the raw regional averages
    #[must_use]
    pub const fn deterministic() -> Self {
        Self { jitter: false }
    }

    /// Estimate using the thread-local random source for the jitter terms
    #[must_use]
    pub fn estimate(&self, request: &PredictionRequest, data: &ReferenceData) -> PredictionResult {
        self.estimate_with_rng(request, data, &mut rand::rng())
    }

    /// Estimate with an injected random source. Seed the source to make the
    /// jitter terms reproducible; the scored probability is deterministic
    /// either way.
    #[must_use]
    pub fn estimate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &PredictionRequest,
        data: &ReferenceData,
        rng: &mut R,
    ) -> PredictionResult {
        let probability = scoring::resistance_probability(request, data);

        let confidence_level = if self.jitter {
            CONFIDENCE_BASE + rng.random_range(0.0..CONFIDENCE_SPREAD)
        } else {
            CONFIDENCE_BASE + CONFIDENCE_SPREAD / 2.0
        };

        PredictionResult {
            resistance_probability: probability,
            confidence_level,
            recommended_alternatives: scoring::recommended_alternatives(&request.drug_name),
            risk_factors: scoring::risk_factors(request, data),
            timeline: escalation_timeline(probability, LOCAL_TIMELINE_STEP),
            geo_risk: geo_risk_ranking(data, self.jitter, rng),
            origin: PredictionOrigin::Local,
            model_version: None,
            generated_at: Utc::now(),
        }
    }
}

impl Default for LocalEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the monthly projection: a linear escalation from the estimated
/// probability, capped at the probability ceiling. A naive "resistance keeps
/// climbing" extrapolation, not a fitted trend.
#[must_use]
pub fn escalation_timeline(probability: f64, step: f64) -> Vec<TimelinePoint> {
    (0..TIMELINE_MONTHS)
        .map(|i| TimelinePoint {
            month: format!("Month {}", i + 1),
            probability: (probability + i as f64 * step).min(scoring::PROBABILITY_CEILING),
        })
        .collect()
}

/// Rank every region by jittered average resistance, descending. The jitter
/// re-randomizes on every call, so repeated calls reorder regions whose
/// averages are close.
#[must_use]
pub fn geo_risk_ranking<R: Rng + ?Sized>(
    data: &ReferenceData,
    jitter: bool,
    rng: &mut R,
) -> Vec<GeoRiskEntry> {
    data.regions
        .iter()
        .map(|profile| {
            let factor = if jitter {
                1.0 + rng.random_range(0.0..GEO_JITTER_SPREAD)
            } else {
                1.0
            };
            GeoRiskEntry {
                region: profile.name().to_string(),
                risk: profile.avg_resistance * factor,
            }
        })
        .sorted_by(|a, b| b.risk.total_cmp(&a.risk))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Region;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_request() -> PredictionRequest {
        PredictionRequest::new("Artemether-Lumefantrine (AL)", "Uganda", Region::East, 28)
            .with_previous_treatments(1)
            .with_markers(&["Pfkelch13 R561H"])
    }

    #[test]
    fn test_result_shape() {
        let data = ReferenceData::bundled();
        let result = LocalEstimator::new().estimate(&sample_request(), &data);

        assert!(result.resistance_probability >= scoring::PROBABILITY_FLOOR);
        assert!(result.resistance_probability <= scoring::PROBABILITY_CEILING);
        assert_eq!(result.timeline.len(), TIMELINE_MONTHS);
        assert_eq!(result.geo_risk.len(), data.regions.len());
        assert_eq!(result.recommended_alternatives.len(), 2);
        assert!(!result.risk_factors.is_empty());
        assert_eq!(result.origin, PredictionOrigin::Local);
        assert!(result.model_version.is_none());
    }

    #[test]
    fn test_timeline_monotone_and_capped() {
        let timeline = escalation_timeline(90.0, LOCAL_TIMELINE_STEP);
        for pair in timeline.windows(2) {
            assert!(pair[0].probability <= pair[1].probability);
        }
        assert!(timeline.iter().all(|p| p.probability <= 95.0));
        assert_eq!(timeline.last().unwrap().probability, 95.0);
        assert_eq!(timeline[0].month, "Month 1");
        assert_eq!(timeline[11].month, "Month 12");
    }

    #[test]
    fn test_geo_risk_one_entry_per_region_descending() {
        let data = ReferenceData::bundled();
        let mut rng = StdRng::seed_from_u64(7);
        let ranking = geo_risk_ranking(&data, true, &mut rng);

        assert_eq!(ranking.len(), Region::ALL.len());
        for pair in ranking.windows(2) {
            assert!(pair[0].risk >= pair[1].risk);
        }
        let mut names: Vec<_> = ranking.iter().map(|e| e.region.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Region::ALL.len());
    }

    #[test]
    fn test_confidence_within_advertised_band() {
        let data = ReferenceData::bundled();
        let estimator = LocalEstimator::new();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let result = estimator.estimate_with_rng(&sample_request(), &data, &mut rng);
            assert!(result.confidence_level >= 85.0);
            assert!(result.confidence_level < 95.0);
        }
    }

    #[test]
    fn test_seeded_estimates_are_reproducible() {
        let data = ReferenceData::bundled();
        let estimator = LocalEstimator::new();
        let a = estimator.estimate_with_rng(&sample_request(), &data, &mut StdRng::seed_from_u64(42));
        let b = estimator.estimate_with_rng(&sample_request(), &data, &mut StdRng::seed_from_u64(42));

        assert_eq!(a.resistance_probability, b.resistance_probability);
        assert_eq!(a.confidence_level, b.confidence_level);
        let risks_a: Vec<f64> = a.geo_risk.iter().map(|e| e.risk).collect();
        let risks_b: Vec<f64> = b.geo_risk.iter().map(|e| e.risk).collect();
        assert_eq!(risks_a, risks_b);
    }

    #[test]
    fn test_deterministic_estimator_has_no_jitter() {
        let data = ReferenceData::bundled();
        let estimator = LocalEstimator::deterministic();
        let a = estimator.estimate(&sample_request(), &data);
        let b = estimator.estimate(&sample_request(), &data);

        assert_eq!(a.confidence_level, 90.0);
        assert_eq!(a.confidence_level, b.confidence_level);
        for (x, y) in a.geo_risk.iter().zip(&b.geo_risk) {
            assert_eq!(x.region, y.region);
            assert_eq!(x.risk, y.risk);
        }
        // Unjittered risk is exactly the regional average
        let central = a.geo_risk.iter().find(|e| e.region == "Central Africa").unwrap();
        assert_eq!(central.risk, 45.8);
        assert_eq!(a.geo_risk[0].region, "Central Africa");
    }

    #[test]
    fn test_probability_is_deterministic_across_jittered_calls() {
        let data = ReferenceData::bundled();
        let estimator = LocalEstimator::new();
        let first = estimator.estimate(&sample_request(), &data).resistance_probability;
        for _ in 0..10 {
            let again = estimator.estimate(&sample_request(), &data).resistance_probability;
            assert_eq!(first, again);
        }
    }
}
