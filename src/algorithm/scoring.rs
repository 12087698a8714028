//! Deterministic resistance-probability scoring
//!
//! Implements the additive heuristic behind the offline estimator: a fixed
//! baseline plus weighted contributions from the country's resistance level,
//! the patient's treatment history, detected molecular markers, and the
//! drug's trailing efficacy decline, clamped to [5, 95].
//!
//! Everything in this module is a pure function of the request and the
//! reference tables; the jitter terms live in the estimator.

use crate::data::ReferenceData;
use crate::models::prediction::PredictionRequest;
use crate::models::types::ResistanceLevel;
use rustc_hash::FxHashSet;

/// Baseline probability every prediction starts from (percentage points)
pub const BASELINE_PROBABILITY: f64 = 15.0;
/// Lower clamp of the resistance probability
pub const PROBABILITY_FLOOR: f64 = 5.0;
/// Upper clamp of the resistance probability
pub const PROBABILITY_CEILING: f64 = 95.0;
/// Points added per prior treatment course
pub const TREATMENT_WEIGHT: f64 = 8.0;
/// Points added per detected molecular marker
pub const MARKER_WEIGHT: f64 = 5.0;
/// Points added per percentage point of three-year efficacy decline
pub const EFFICACY_DECLINE_WEIGHT: f64 = 2.0;

/// The validated artemisinin partial-resistance marker flagged as a risk factor
pub const ARTEMISININ_MARKER: &str = "Pfkelch13 R561H";
/// The chloroquine resistance marker flagged as a risk factor
pub const CHLOROQUINE_MARKER: &str = "Pfcrt K76T";

/// Default risk-factor entry when no rule fires
pub const DEFAULT_RISK_FACTOR: &str = "Standard monitoring recommended";

/// Round to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Country contribution to the score. An unmatched country is treated as a
/// low-resistance default rather than an error, since requests may carry
/// free-form or stale country names.
#[must_use]
pub fn country_increment(request: &PredictionRequest, data: &ReferenceData) -> f64 {
    data.country_by_name(&request.country).map_or_else(
        || ResistanceLevel::Low.score_increment(),
        |country| country.resistance_level.score_increment(),
    )
}

/// Drug contribution to the score: twice the three-year efficacy decline.
/// Negative when efficacy improved; zero for an unmatched drug.
#[must_use]
pub fn drug_increment(request: &PredictionRequest, data: &ReferenceData) -> f64 {
    data.drug_by_name(&request.drug_name)
        .map_or(0.0, |drug| EFFICACY_DECLINE_WEIGHT * drug.efficacy_decline())
}

/// Unclamped additive score
#[must_use]
pub fn raw_score(request: &PredictionRequest, data: &ReferenceData) -> f64 {
    BASELINE_PROBABILITY
        + country_increment(request, data)
        + TREATMENT_WEIGHT * f64::from(request.previous_treatments)
        + MARKER_WEIGHT * request.molecular_markers.len() as f64
        + drug_increment(request, data)
}

/// Final resistance probability: the raw score clamped to
/// [`PROBABILITY_FLOOR`], [`PROBABILITY_CEILING`] and rounded to one decimal
#[must_use]
pub fn resistance_probability(request: &PredictionRequest, data: &ReferenceData) -> f64 {
    round1(raw_score(request, data).clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING))
}

/// Qualitative risk factors for a request. Each rule fires at most once;
/// when none fire the list holds the single default entry.
#[must_use]
pub fn risk_factors(request: &PredictionRequest, data: &ReferenceData) -> Vec<String> {
    let detected: FxHashSet<&str> = request
        .molecular_markers
        .iter()
        .map(String::as_str)
        .collect();

    let mut factors = Vec::new();
    if request.previous_treatments > 2 {
        factors.push("Multiple previous treatments".to_string());
    }
    if detected.contains(ARTEMISININ_MARKER) {
        factors.push("Validated artemisinin resistance marker".to_string());
    }
    if detected.contains(CHLOROQUINE_MARKER) {
        factors.push("Chloroquine resistance marker present".to_string());
    }
    if data
        .country_by_name(&request.country)
        .is_some_and(|c| c.resistance_level.is_elevated())
    {
        factors.push("High resistance environment".to_string());
    }
    if request.patient_age < 5 {
        factors.push("Pediatric patient (higher vulnerability)".to_string());
    }

    if factors.is_empty() {
        factors.push(DEFAULT_RISK_FACTOR.to_string());
    }
    factors
}

/// Recommended alternative treatments for a drug: a fixed substitution table
/// keyed on prefix match, with a default pair for unknown drugs. Always
/// returns exactly two entries.
#[must_use]
pub fn recommended_alternatives(drug_name: &str) -> Vec<String> {
    let pair: [&str; 2] = if drug_name.starts_with("Artemether-Lumefantrine") {
        [
            "Artesunate-Amodiaquine (ASAQ)",
            "Dihydroartemisinin-Piperaquine (DHA-PPQ)",
        ]
    } else if drug_name.starts_with("Artesunate-Amodiaquine") {
        [
            "Artemether-Lumefantrine (AL)",
            "Artesunate-Pyronaridine (ASPY)",
        ]
    } else {
        [
            "Artemether-Lumefantrine (AL)",
            "Artesunate-Amodiaquine (ASAQ)",
        ]
    };
    pair.iter().map(|d| (*d).to_string()).collect()
}
