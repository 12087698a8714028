//! Risk estimation algorithms
//!
//! The deterministic scoring core, the offline heuristic estimator built on
//! it, the population forecast, and dashboard aggregates.

pub mod estimator;
pub mod forecast;
pub mod scoring;
pub mod summary;

pub use estimator::LocalEstimator;
pub use forecast::{forecast_population, forecast_population_with_rng};
pub use summary::SurveillanceSummary;
