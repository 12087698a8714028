//! Fallback behavior of the prediction service.

use resistwatch::models::prediction::PredictionOrigin;
use resistwatch::{
    ForecastRequest, PredictionRequest, PredictionService, Region, ServiceConfig,
};
use std::time::Duration;

fn unreachable_config() -> ServiceConfig {
    // Nothing listens on the discard port; connects fail immediately
    let mut config = ServiceConfig::with_base_url("http://127.0.0.1:9");
    config.request_timeout = Duration::from_secs(2);
    config.max_retries = 0;
    config
}

#[tokio::test]
async fn prediction_falls_back_when_service_is_down() {
    let service = PredictionService::new(&unreachable_config()).unwrap();
    let request = PredictionRequest::new("Artemether-Lumefantrine (AL)", "Uganda", Region::East, 28)
        .with_previous_treatments(1);

    let result = service.predict(&request).await;
    assert_eq!(result.origin, PredictionOrigin::Local);
    assert!(result.model_version.is_none());
    assert_eq!(result.timeline.len(), 12);
    assert_eq!(result.recommended_alternatives.len(), 2);
}

#[tokio::test]
async fn forecast_falls_back_when_service_is_down() {
    let service = PredictionService::new(&unreachable_config()).unwrap();
    let request = ForecastRequest::new("Ghana", Region::West, "Chloroquine (CQ)");

    let forecast = service.forecast(&request).await;
    assert_eq!(forecast.origin, PredictionOrigin::Local);
    assert_eq!(forecast.country, "Ghana");
    assert_eq!(forecast.forecasts.len(), 3);
}

#[tokio::test]
async fn offline_service_never_touches_the_network() {
    let service = PredictionService::offline(&ServiceConfig::default());
    let request = PredictionRequest::new("Quinine", "Atlantis", Region::South, 60);

    let result = service.predict(&request).await;
    assert_eq!(result.origin, PredictionOrigin::Local);
    assert_eq!(result.resistance_probability, 20.0);
}

#[tokio::test]
async fn concurrent_predictions_are_independent() {
    let service = PredictionService::offline(&ServiceConfig::default());
    let request = PredictionRequest::new("Artemether-Lumefantrine (AL)", "Kenya", Region::East, 30);

    let (a, b) = tokio::join!(service.predict(&request), service.predict(&request));
    assert_eq!(a.resistance_probability, b.resistance_probability);
    assert_eq!(a.risk_factors, b.risk_factors);
}
