//! Remote prediction service client
//!
//! Talks to the prediction service's `/api/v1/predictions` endpoints and
//! transforms its responses into the same result shapes the local estimator
//! produces, so callers never care which path answered. Transient server
//! errors (502, 503, 504) are retried with exponential backoff; every other
//! failure surfaces as a [`ServiceError`], which the fallback policy treats
//! as "service unavailable".

use crate::algorithm::estimator::{escalation_timeline, geo_risk_ranking};
use crate::config::ServiceConfig;
use crate::data::ReferenceData;
use crate::models::prediction::{
    ForecastPoint, ForecastRequest, PopulationForecast, PredictionOrigin, PredictionRequest,
    PredictionResult,
};
use crate::models::types::{Region, Trend};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// HTTP status codes that indicate transient server errors (retryable)
const RETRYABLE_STATUS_CODES: &[u16] = &[502, 503, 504];

/// Initial backoff delay in milliseconds (doubles with each retry)
const INITIAL_BACKOFF_MS: u64 = 100;

/// Monthly escalation step (percentage points) applied to remote results.
/// The remote model's projections climb more slowly than the offline
/// heuristic's.
pub const REMOTE_TIMELINE_STEP: f64 = 1.2;

/// Errors from the remote prediction service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Transport-level failure (connect, timeout, TLS)
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an error status
    #[error("Service returned status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// The service answered with a body we could not decode
    #[error("Failed to decode service response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Individual prediction response, as the service sends it
#[derive(Debug, Deserialize)]
struct RemotePrediction {
    resistance_probability: f64,
    confidence_interval: [f64; 2],
    risk_factors: Vec<String>,
    recommended_alternatives: Vec<String>,
    #[serde(default)]
    model_version: Option<String>,
}

/// Population forecast response, as the service sends it
#[derive(Debug, Deserialize)]
struct RemoteForecast {
    country: String,
    region: String,
    drug_name: String,
    baseline_resistance: f64,
    forecasts: Vec<RemoteForecastPoint>,
    trend_direction: String,
}

#[derive(Debug, Deserialize)]
struct RemoteForecastPoint {
    year: i32,
    predicted_resistance: f64,
    lower_bound: f64,
    upper_bound: f64,
}

/// Health report from the service's health endpoint
#[derive(Debug, Deserialize)]
pub struct ServiceHealth {
    /// Reported status; "healthy" when the service is up
    pub status: String,
    /// Service version, if reported
    #[serde(default)]
    pub version: Option<String>,
}

impl ServiceHealth {
    /// Whether the service reports itself healthy
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Client for the remote prediction service
#[derive(Debug)]
pub struct RemoteEstimator {
    client: Client,
    base_url: String,
    max_retries: u32,
    jitter: bool,
}

impl RemoteEstimator {
    /// Build a client from the service configuration
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            jitter: config.jitter,
        })
    }

    /// Probe the service's health endpoint
    pub async fn health(&self) -> Result<ServiceHealth, ServiceError> {
        let url = format!("{}/api/v1/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        if status >= 400 {
            return Err(ServiceError::Status {
                status,
                message: text,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Request an individual prediction from the service
    pub async fn predict(
        &self,
        request: &PredictionRequest,
        data: &ReferenceData,
    ) -> Result<PredictionResult, ServiceError> {
        let body = serde_json::to_string(request)?;
        let text = self.post("/api/v1/predictions/individual", body).await?;
        let response: RemotePrediction = serde_json::from_str(&text)?;
        Ok(self.into_result(response, data))
    }

    /// Request a population forecast from the service
    pub async fn forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<PopulationForecast, ServiceError> {
        let body = serde_json::to_string(request)?;
        let text = self.post("/api/v1/predictions/population", body).await?;
        let response: RemoteForecast = serde_json::from_str(&text)?;

        Ok(PopulationForecast {
            region: Region::from_id(&response.region).unwrap_or(request.region),
            country: response.country,
            drug_name: response.drug_name,
            baseline_resistance: response.baseline_resistance,
            forecasts: response
                .forecasts
                .into_iter()
                .map(|p| ForecastPoint {
                    year: p.year,
                    predicted_resistance: p.predicted_resistance,
                    lower_bound: p.lower_bound,
                    upper_bound: p.upper_bound,
                })
                .collect(),
            trend_direction: Trend::from(response.trend_direction.as_str()),
            origin: PredictionOrigin::Remote,
            generated_at: Utc::now(),
        })
    }

    /// Send a POST request with automatic retry for transient server errors.
    ///
    /// Uses exponential backoff: 100ms, 200ms, 400ms between retries.
    async fn post(&self, path: &str, body: String) -> Result<String, ServiceError> {
        let url = format!("{}{path}", self.base_url);
        let mut backoff = Duration::from_millis(INITIAL_BACKOFF_MS);

        for attempt in 0..=self.max_retries {
            let response = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .body(body.clone())
                .send()
                .await?;

            let status = response.status().as_u16();
            if RETRYABLE_STATUS_CODES.contains(&status) && attempt < self.max_retries {
                log::warn!(
                    "Transient error {status} from {url}, retrying (attempt {}/{})",
                    attempt + 1,
                    self.max_retries
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
                continue;
            }

            let text = response.text().await?;
            if status < 400 {
                return Ok(text);
            }
            return Err(ServiceError::Status {
                status,
                message: text,
            });
        }

        unreachable!("retry loop always returns within max_retries + 1 attempts")
    }

    /// Transform a service response into the shared result shape. The
    /// timeline and geo-risk ranking are synthesized locally; the service's
    /// confidence interval collapses to a single confidence level.
    fn into_result(&self, response: RemotePrediction, data: &ReferenceData) -> PredictionResult {
        let [lower, upper] = response.confidence_interval;
        let confidence_level = 100.0 - (upper - lower) / 2.0;

        PredictionResult {
            resistance_probability: response.resistance_probability,
            confidence_level,
            recommended_alternatives: response.recommended_alternatives,
            risk_factors: response.risk_factors,
            timeline: escalation_timeline(response.resistance_probability, REMOTE_TIMELINE_STEP),
            geo_risk: geo_risk_ranking(data, self.jitter, &mut rand::rng()),
            origin: PredictionOrigin::Remote,
            model_version: response.model_version,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> RemoteEstimator {
        RemoteEstimator::new(&ServiceConfig::default()).unwrap()
    }

    #[test]
    fn test_response_transform() {
        let data = ReferenceData::bundled();
        let response = RemotePrediction {
            resistance_probability: 48.3,
            confidence_interval: [42.0, 54.0],
            risk_factors: vec!["Multiple previous treatments (3)".to_string()],
            recommended_alternatives: vec![
                "ASAQ (Artesunate-Amodiaquine)".to_string(),
                "DHA-PPQ (Dihydroartemisinin-Piperaquine)".to_string(),
            ],
            model_version: Some("v1.2.0-ensemble".to_string()),
        };

        let result = estimator().into_result(response, &data);
        assert_eq!(result.resistance_probability, 48.3);
        assert_eq!(result.confidence_level, 94.0);
        assert_eq!(result.origin, PredictionOrigin::Remote);
        assert_eq!(result.model_version.as_deref(), Some("v1.2.0-ensemble"));
        assert_eq!(result.timeline.len(), 12);
        // Remote results use the shallower monthly step
        let step = result.timeline[1].probability - result.timeline[0].probability;
        assert!((step - REMOTE_TIMELINE_STEP).abs() < 1e-9);
        assert_eq!(result.geo_risk.len(), data.regions.len());
    }

    #[test]
    fn test_prediction_response_decoding() {
        // A service payload with fields we do not consume
        let text = r#"{
            "prediction_id": "7c0b9e0a",
            "resistance_probability": 61.0,
            "confidence_interval": [55.5, 66.5],
            "risk_level": "HIGH",
            "risk_factors": ["High-risk marker detected: Pfkelch13 C580Y"],
            "recommended_alternatives": ["AL (Artemether-Lumefantrine)", "ASAQ (Artesunate-Amodiaquine)"],
            "model_version": "v1.2.0-ensemble",
            "model_type": "XGBoost + LogReg + RF Ensemble",
            "created_at": "2026-08-23T10:15:00",
            "disclaimer": "Surveillance use only."
        }"#;
        let response: RemotePrediction = serde_json::from_str(text).unwrap();
        assert_eq!(response.resistance_probability, 61.0);
        assert_eq!(response.confidence_interval, [55.5, 66.5]);
        assert_eq!(response.risk_factors.len(), 1);
    }

    #[test]
    fn test_health_response_decoding() {
        let text = r#"{
            "status": "healthy",
            "message": "Malaria Drug Resistance API is running",
            "version": "1.0.0",
            "timestamp": "2026-08-23T10:15:00"
        }"#;
        let health: ServiceHealth = serde_json::from_str(text).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.version.as_deref(), Some("1.0.0"));

        let degraded: ServiceHealth = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!degraded.is_healthy());
        assert!(degraded.version.is_none());
    }

    #[test]
    fn test_forecast_response_decoding() {
        let text = r#"{
            "prediction_id": "a1b2",
            "country": "Nigeria",
            "region": "west",
            "drug_name": "Artemether-Lumefantrine (AL)",
            "baseline_resistance": 24.7,
            "forecasts": [
                {"year": 2027, "predicted_resistance": 28.9, "lower_bound": 23.9, "upper_bound": 33.9}
            ],
            "trend_direction": "increasing",
            "model_version": "v1.0.0-timeseries",
            "created_at": "2026-08-23T10:15:00",
            "disclaimer": "Planning use only."
        }"#;
        let response: RemoteForecast = serde_json::from_str(text).unwrap();
        assert_eq!(response.forecasts.len(), 1);
        assert_eq!(response.trend_direction, "increasing");
    }
}
