//! Population-level resistance forecasting
//!
//! Projects population resistance over a 1-5 year horizon from a randomized
//! baseline with widening confidence bounds, mirroring the remote service's
//! time-series endpoint so the two paths stay interchangeable.

use crate::algorithm::scoring::round1;
use crate::models::prediction::{ForecastPoint, ForecastRequest, PopulationForecast, PredictionOrigin};
use crate::models::types::Trend;
use chrono::{Datelike, Utc};
use rand::Rng;

/// Baseline resistance draw range (percent)
const BASELINE_RANGE: std::ops::Range<f64> = 15.0..35.0;
/// Yearly increase draw range (percentage points per year)
const YEARLY_INCREASE_RANGE: std::ops::Range<f64> = 2.0..5.0;

/// Forecast population resistance using the thread-local random source
#[must_use]
pub fn forecast_population(request: &ForecastRequest) -> PopulationForecast {
    forecast_population_with_rng(request, &mut rand::rng())
}

/// Forecast population resistance with an injected random source
#[must_use]
pub fn forecast_population_with_rng<R: Rng + ?Sized>(
    request: &ForecastRequest,
    rng: &mut R,
) -> PopulationForecast {
    let baseline = rng.random_range(BASELINE_RANGE);
    let yearly_increase = rng.random_range(YEARLY_INCREASE_RANGE);
    let current_year = Utc::now().year();

    let forecasts = (0..request.horizon())
        .map(|i| {
            let predicted = baseline + f64::from(i + 1) * yearly_increase;
            // Uncertainty grows with the horizon
            let ci_width = 5.0 + f64::from(i) * 2.0;
            ForecastPoint {
                year: current_year + i as i32 + 1,
                predicted_resistance: round1(predicted),
                lower_bound: round1((predicted - ci_width).max(0.0)),
                upper_bound: round1((predicted + ci_width).min(100.0)),
            }
        })
        .collect();

    PopulationForecast {
        country: request.country.clone(),
        region: request.region,
        drug_name: request.drug_name.clone(),
        baseline_resistance: round1(baseline),
        forecasts,
        trend_direction: trend_direction(yearly_increase),
        origin: PredictionOrigin::Local,
        generated_at: Utc::now(),
    }
}

/// Classify the projected trend from the yearly increase
#[must_use]
pub fn trend_direction(yearly_increase: f64) -> Trend {
    if yearly_increase > 3.0 {
        Trend::Increasing
    } else if yearly_increase > 1.0 {
        Trend::Stable
    } else {
        Trend::Decreasing
    }
}
