//! Prediction service with remote-then-local fallback
//!
//! The remote model and the offline heuristic are interchangeable
//! estimators. [`PredictionService`] composes them with a simple policy:
//! try the remote service, and on any error fall back to the local
//! heuristic, which cannot fail. The result records which path answered.

use crate::algorithm::forecast::forecast_population;
use crate::algorithm::LocalEstimator;
use crate::config::ServiceConfig;
use crate::data::ReferenceData;
use crate::error::Result;
use crate::models::prediction::{
    ForecastRequest, PopulationForecast, PredictionRequest, PredictionResult,
};
use crate::remote::{RemoteEstimator, ServiceError};
use std::sync::Arc;

/// A source of treatment-failure predictions
pub trait ResistanceEstimator {
    /// Produce a prediction for a request against the reference tables
    fn predict(
        &self,
        request: &PredictionRequest,
        data: &ReferenceData,
    ) -> impl Future<Output = std::result::Result<PredictionResult, ServiceError>> + Send;
}

impl ResistanceEstimator for LocalEstimator {
    async fn predict(
        &self,
        request: &PredictionRequest,
        data: &ReferenceData,
    ) -> std::result::Result<PredictionResult, ServiceError> {
        // The heuristic has no failure path
        Ok(self.estimate(request, data))
    }
}

impl ResistanceEstimator for RemoteEstimator {
    async fn predict(
        &self,
        request: &PredictionRequest,
        data: &ReferenceData,
    ) -> std::result::Result<PredictionResult, ServiceError> {
        Self::predict(self, request, data).await
    }
}

/// Prediction service composing the remote client with the local fallback
#[derive(Debug)]
pub struct PredictionService {
    remote: Option<RemoteEstimator>,
    local: LocalEstimator,
    data: Arc<ReferenceData>,
}

impl PredictionService {
    /// Build a service that tries the configured remote endpoint first
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let remote = RemoteEstimator::new(config)?;
        Ok(Self {
            remote: Some(remote),
            local: local_estimator(config),
            data: ReferenceData::global(),
        })
    }

    /// Build a service that only uses the offline heuristic
    #[must_use]
    pub fn offline(config: &ServiceConfig) -> Self {
        Self {
            remote: None,
            local: local_estimator(config),
            data: ReferenceData::global(),
        }
    }

    /// Replace the reference dataset (defaults to the bundled tables)
    #[must_use]
    pub fn with_data(mut self, data: Arc<ReferenceData>) -> Self {
        self.data = data;
        self
    }

    /// The reference dataset this service scores against
    #[must_use]
    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Produce an individual prediction. Never fails: remote errors fall
    /// back to the offline heuristic.
    pub async fn predict(&self, request: &PredictionRequest) -> PredictionResult {
        if let Some(remote) = &self.remote {
            match remote.predict(request, &self.data).await {
                Ok(result) => return result,
                Err(e) => {
                    log::warn!("Prediction service unavailable, using offline estimate: {e}");
                }
            }
        }
        self.local.estimate(request, &self.data)
    }

    /// Produce predictions for a batch of requests concurrently. Like
    /// [`predict`](Self::predict) this never fails; results come back in
    /// request order.
    pub async fn predict_batch(&self, requests: &[PredictionRequest]) -> Vec<PredictionResult> {
        futures::future::join_all(requests.iter().map(|r| self.predict(r))).await
    }

    /// Probe the remote service's health endpoint. Offline services and
    /// unreachable or degraded remotes report false.
    pub async fn is_online(&self) -> bool {
        match &self.remote {
            Some(remote) => remote.health().await.is_ok_and(|h| h.is_healthy()),
            None => false,
        }
    }

    /// Produce a population forecast with the same fallback policy
    pub async fn forecast(&self, request: &ForecastRequest) -> PopulationForecast {
        if let Some(remote) = &self.remote {
            match remote.forecast(request).await {
                Ok(forecast) => return forecast,
                Err(e) => {
                    log::warn!("Forecast service unavailable, using offline forecast: {e}");
                }
            }
        }
        forecast_population(request)
    }
}

fn local_estimator(config: &ServiceConfig) -> LocalEstimator {
    if config.jitter {
        LocalEstimator::new()
    } else {
        LocalEstimator::deterministic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prediction::PredictionOrigin;
    use crate::models::types::Region;

    fn sample_request() -> PredictionRequest {
        PredictionRequest::new("Artemether-Lumefantrine (AL)", "Uganda", Region::East, 28)
    }

    #[tokio::test]
    async fn test_offline_service_uses_local_estimator() {
        let service = PredictionService::offline(&ServiceConfig::default());
        let result = service.predict(&sample_request()).await;
        assert_eq!(result.origin, PredictionOrigin::Local);
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back() {
        // Nothing listens on this port; the connect error must not surface
        let config = ServiceConfig::with_base_url("http://127.0.0.1:9");
        let service = PredictionService::new(&config).unwrap();
        let result = service.predict(&sample_request()).await;
        assert_eq!(result.origin, PredictionOrigin::Local);
        assert!(result.resistance_probability >= 5.0);
        assert!(result.resistance_probability <= 95.0);
    }

    #[tokio::test]
    async fn test_batch_preserves_request_order() {
        let service = PredictionService::offline(&ServiceConfig::default());
        let requests = vec![
            PredictionRequest::new("Quinine", "Atlantis", Region::East, 30),
            sample_request().with_previous_treatments(2),
        ];

        let results = service.predict_batch(&requests).await;
        assert_eq!(results.len(), 2);
        // Minimal request scores the baseline-plus-default 20.0
        assert_eq!(results[0].resistance_probability, 20.0);
        assert!(results[1].resistance_probability > results[0].resistance_probability);
    }

    #[tokio::test]
    async fn test_is_online_without_reachable_remote() {
        let offline = PredictionService::offline(&ServiceConfig::default());
        assert!(!offline.is_online().await);

        let config = ServiceConfig::with_base_url("http://127.0.0.1:9");
        let unreachable = PredictionService::new(&config).unwrap();
        assert!(!unreachable.is_online().await);
    }

    #[tokio::test]
    async fn test_unreachable_remote_forecast_falls_back() {
        let config = ServiceConfig::with_base_url("http://127.0.0.1:9");
        let service = PredictionService::new(&config).unwrap();
        let request = ForecastRequest::new("Nigeria", Region::West, "Chloroquine (CQ)");
        let forecast = service.forecast(&request).await;
        assert_eq!(forecast.origin, PredictionOrigin::Local);
        assert_eq!(forecast.forecasts.len(), 3);
    }
}
