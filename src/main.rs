use anyhow::Context;
use log::{info, warn};
use resistwatch::{
    ForecastRequest, PredictionOrigin, PredictionRequest, PredictionService, Region, ServiceConfig,
    SurveillanceSummary,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var("RESISTWATCH_API_URL") {
        Ok(url) => ServiceConfig::with_base_url(&url),
        Err(_) => {
            warn!("RESISTWATCH_API_URL not set, using {}", ServiceConfig::default().base_url);
            ServiceConfig::default()
        }
    };

    let service = PredictionService::new(&config).context("building prediction service")?;
    if service.is_online().await {
        info!("Prediction service online at {}", config.base_url);
    } else {
        warn!("Prediction service offline, estimates use the local heuristic");
    }

    let summary = SurveillanceSummary::compute(service.data());
    info!(
        "Surveillance coverage: {} countries ({} high-resistance), {} sites, mean efficacy {:.1}%",
        summary.total_countries,
        summary.high_resistance_countries,
        summary.surveillance_sites,
        summary.avg_efficacy
    );

    // Example 1: individual prediction for a pediatric case in Uganda
    let request = PredictionRequest::new("Artemether-Lumefantrine (AL)", "Uganda", Region::East, 4)
        .with_previous_treatments(2)
        .with_markers(&["Pfkelch13 R561H", "Pfcrt K76T"]);

    let prediction = service.predict(&request).await;
    if prediction.origin == PredictionOrigin::Local {
        info!("Remote model unavailable, result comes from the offline heuristic");
    }
    info!(
        "Failure probability for {} in {}: {:.1}% ({}), confidence {:.1}%",
        request.drug_name,
        request.country,
        prediction.resistance_probability,
        prediction.risk_level(),
        prediction.confidence_level
    );
    for factor in &prediction.risk_factors {
        info!("  risk factor: {factor}");
    }
    info!(
        "  alternatives: {}",
        prediction.recommended_alternatives.join(", ")
    );

    // Example 2: three-year population forecast for Nigeria
    let forecast_request = ForecastRequest::new("Nigeria", Region::West, "Artemether-Lumefantrine (AL)");
    let forecast = service.forecast(&forecast_request).await;
    info!(
        "Population forecast for {} (baseline {:.1}%, trend {:?}):",
        forecast.country, forecast.baseline_resistance, forecast.trend_direction
    );
    for point in &forecast.forecasts {
        info!(
            "  {}: {:.1}% [{:.1}, {:.1}]",
            point.year, point.predicted_resistance, point.lower_bound, point.upper_bound
        );
    }

    Ok(())
}
