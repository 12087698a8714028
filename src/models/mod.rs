//! Domain models for drug-resistance surveillance
//!
//! Reference records (countries, drugs, regions, markers) are immutable data
//! loaded once per process; prediction request/result types are transient
//! value objects shared with the remote service's wire contract.

pub mod country;
pub mod drug;
pub mod marker;
pub mod prediction;
pub mod region;
pub mod types;

pub use country::{Country, MarkerObservation};
pub use drug::Drug;
pub use marker::MarkerDescriptor;
pub use prediction::{
    ForecastPoint, ForecastRequest, GeoRiskEntry, PopulationForecast, PredictionOrigin,
    PredictionRequest, PredictionResult, TimelinePoint,
};
pub use region::RegionProfile;
pub use types::{
    DrugClass, MarkerCategory, MarkerSignificance, Region, ResistanceLevel, RiskLevel, Trend,
};
