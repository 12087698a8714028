//! Configuration for the prediction service.

use std::time::Duration;

/// Configuration for the prediction service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the remote prediction service
    pub base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Retry attempts for transient server errors
    pub max_retries: u32,
    /// Whether local estimates carry the confidence/geo-risk jitter terms
    pub jitter: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(10),
            max_retries: 3,
            jitter: true,
        }
    }
}

impl ServiceConfig {
    /// Configuration pointing at a specific service URL
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}
