//! Error handling for the resistance prediction service.

use crate::remote::ServiceError;
use std::fmt;

/// Specialized error type for prediction-service operations
#[derive(Debug)]
pub enum ResistwatchError {
    /// Error reaching or decoding the remote prediction service
    Service(ServiceError),
    /// Invalid service configuration
    ConfigError(String),
}

impl From<ServiceError> for ResistwatchError {
    fn from(error: ServiceError) -> Self {
        Self::Service(error)
    }
}

impl fmt::Display for ResistwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service(e) => write!(f, "Service error: {e}"),
            Self::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ResistwatchError {}

/// Result type for prediction-service operations
pub type Result<T> = std::result::Result<T, ResistwatchError>;
