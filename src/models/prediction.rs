//! Prediction request and result shapes
//!
//! These types mirror the wire contract of the remote prediction service, so
//! the local heuristic estimator and the remote client produce isomorphic
//! results and the two paths stay interchangeable.

use crate::models::types::{Region, RiskLevel, Trend};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input tuple for an individual treatment-failure prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Name of the antimalarial drug under consideration
    pub drug_name: String,
    /// Country display name
    pub country: String,
    /// Surveillance region of the country
    pub region: Region,
    /// Patient age in years (0-120)
    pub patient_age: u32,
    /// Number of prior treatment courses
    #[serde(default)]
    pub previous_treatments: u32,
    /// Molecular markers detected for this patient. The list is scored by
    /// raw length, so duplicate names inflate the marker term.
    #[serde(default)]
    pub molecular_markers: Vec<String>,
    /// Parasite density if available (parasites/uL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parasite_density: Option<f64>,
}

impl PredictionRequest {
    /// Create a request with no treatment history and no detected markers
    #[must_use]
    pub fn new(drug_name: &str, country: &str, region: Region, patient_age: u32) -> Self {
        Self {
            drug_name: drug_name.to_string(),
            country: country.to_string(),
            region,
            patient_age,
            previous_treatments: 0,
            molecular_markers: Vec::new(),
            parasite_density: None,
        }
    }

    /// Set the number of prior treatment courses
    #[must_use]
    pub const fn with_previous_treatments(mut self, count: u32) -> Self {
        self.previous_treatments = count;
        self
    }

    /// Set the detected molecular markers
    #[must_use]
    pub fn with_markers(mut self, markers: &[&str]) -> Self {
        self.molecular_markers = markers.iter().map(|m| (*m).to_string()).collect();
        self
    }
}

/// One point of the monthly resistance projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Display label, "Month 1" through "Month 12"
    pub month: String,
    /// Projected resistance probability (percent, capped at 95)
    pub probability: f64,
}

/// One entry of the comparative regional risk ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoRiskEntry {
    /// Region display name
    pub region: String,
    /// Comparative risk score
    pub risk: f64,
}

/// Which estimator produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionOrigin {
    /// The remote prediction service
    Remote,
    /// The local heuristic, used directly or as a fallback
    Local,
}

/// Result of an individual treatment-failure prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Estimated probability of treatment failure, in [5, 95],
    /// rounded to one decimal
    pub resistance_probability: f64,
    /// Synthetic confidence level (percent). Not derived from statistical
    /// uncertainty; see the estimator documentation.
    pub confidence_level: f64,
    /// Recommended alternative treatments, always exactly two
    pub recommended_alternatives: Vec<String>,
    /// Qualitative risk-factor descriptions, never empty
    pub risk_factors: Vec<String>,
    /// 12-month escalation projection
    pub timeline: Vec<TimelinePoint>,
    /// Per-region comparative risk, sorted descending
    pub geo_risk: Vec<GeoRiskEntry>,
    /// Which estimator produced this result
    pub origin: PredictionOrigin,
    /// Model version reported by the remote service, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    /// When the prediction was generated
    pub generated_at: DateTime<Utc>,
}

impl PredictionResult {
    /// Categorical risk level derived from the resistance probability
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_probability(self.resistance_probability)
    }
}

/// Input for a population-level resistance forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Country display name
    pub country: String,
    /// Surveillance region of the country
    pub region: Region,
    /// Drug the forecast applies to
    pub drug_name: String,
    /// Forecast horizon in years, clamped to 1-5
    #[serde(default = "default_forecast_years")]
    pub forecast_years: u32,
}

const fn default_forecast_years() -> u32 {
    3
}

impl ForecastRequest {
    /// Create a forecast request with the default three-year horizon
    #[must_use]
    pub fn new(country: &str, region: Region, drug_name: &str) -> Self {
        Self {
            country: country.to_string(),
            region,
            drug_name: drug_name.to_string(),
            forecast_years: default_forecast_years(),
        }
    }

    /// Forecast horizon clamped to the supported 1-5 year range
    #[must_use]
    pub fn horizon(&self) -> u32 {
        self.forecast_years.clamp(1, 5)
    }
}

/// One forecast year with its confidence bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar year of the forecast
    pub year: i32,
    /// Predicted population resistance (percent)
    pub predicted_resistance: f64,
    /// Lower confidence bound, floored at 0
    pub lower_bound: f64,
    /// Upper confidence bound, capped at 100
    pub upper_bound: f64,
}

/// Result of a population-level resistance forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationForecast {
    /// Country the forecast applies to
    pub country: String,
    /// Region of the country
    pub region: Region,
    /// Drug the forecast applies to
    pub drug_name: String,
    /// Current baseline resistance estimate (percent)
    pub baseline_resistance: f64,
    /// One point per forecast year, in chronological order
    pub forecasts: Vec<ForecastPoint>,
    /// Overall direction of the projected trend
    pub trend_direction: Trend,
    /// Which estimator produced this forecast
    pub origin: PredictionOrigin,
    /// When the forecast was generated
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = PredictionRequest::new("Chloroquine (CQ)", "Kenya", Region::East, 34)
            .with_previous_treatments(2)
            .with_markers(&["Pfcrt K76T"]);

        assert_eq!(request.previous_treatments, 2);
        assert_eq!(request.molecular_markers, vec!["Pfcrt K76T".to_string()]);
        assert!(request.parasite_density.is_none());
    }

    #[test]
    fn test_request_wire_format() {
        let request = PredictionRequest::new("Artemether-Lumefantrine (AL)", "Uganda", Region::East, 7);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["drug_name"], "Artemether-Lumefantrine (AL)");
        assert_eq!(json["region"], "east");
        assert_eq!(json["patient_age"], 7);
        assert_eq!(json["previous_treatments"], 0);
        // Absent density must not appear on the wire
        assert!(json.get("parasite_density").is_none());
    }

    #[test]
    fn test_forecast_horizon_clamping() {
        let mut request = ForecastRequest::new("Nigeria", Region::West, "Chloroquine (CQ)");
        assert_eq!(request.horizon(), 3);
        request.forecast_years = 0;
        assert_eq!(request.horizon(), 1);
        request.forecast_years = 12;
        assert_eq!(request.horizon(), 5);
    }
}
