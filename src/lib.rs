//! A Rust library for antimalarial drug-resistance surveillance data and
//! treatment-failure risk estimation, with a remote prediction client and
//! an offline heuristic fallback.

pub mod algorithm;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod remote;
pub mod service;

// Re-export the most common types for easier use
// Core types
pub use config::ServiceConfig;
pub use data::ReferenceData;
pub use error::{ResistwatchError, Result};
pub use service::{PredictionService, ResistanceEstimator};

// Estimators
pub use algorithm::{LocalEstimator, SurveillanceSummary, forecast_population};
pub use remote::{RemoteEstimator, ServiceError, ServiceHealth};

// Request and result shapes
pub use models::prediction::{
    ForecastRequest, PopulationForecast, PredictionOrigin, PredictionRequest, PredictionResult,
};
pub use models::types::{Region, ResistanceLevel, RiskLevel};
