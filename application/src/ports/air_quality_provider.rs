//! Air quality provider port
//!
//! Defines the interface for fetching pollutant readings. Adapters (live
//! API client, synthetic demo data, caching decorator) live in the
//! infrastructure layer.

use async_trait::async_trait;
use aqi_domain::{City, DataSource, PollutantReading};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while fetching readings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No data for {0}")]
    NoData(String),
}

impl ProviderError {
    /// Whether the error is likely to go away on a later attempt
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Timeout | ProviderError::Request(_) => true,
            ProviderError::Http { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Source of pollutant readings for a city
#[async_trait]
pub trait AirQualityProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Whether readings from this provider are live or synthetic
    fn source(&self) -> DataSource;

    /// The latest reading for a city
    async fn current(&self, city: &City) -> Result<PollutantReading, ProviderError>;

    /// Up to `points` readings in chronological order
    async fn series(
        &self,
        city: &City,
        points: usize,
    ) -> Result<Vec<PollutantReading>, ProviderError>;
}

#[async_trait]
impl<P: AirQualityProvider + ?Sized> AirQualityProvider for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn source(&self) -> DataSource {
        (**self).source()
    }

    async fn current(&self, city: &City) -> Result<PollutantReading, ProviderError> {
        (**self).current(city).await
    }

    async fn series(
        &self,
        city: &City,
        points: usize,
    ) -> Result<Vec<PollutantReading>, ProviderError> {
        (**self).series(city, points).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(ProviderError::Timeout.is_transient());
        assert!(
            ProviderError::Http {
                status: 503,
                message: "unavailable".to_string()
            }
            .is_transient()
        );
        assert!(
            !ProviderError::Http {
                status: 401,
                message: "bad key".to_string()
            }
            .is_transient()
        );
        assert!(!ProviderError::MissingApiKey.is_transient());
    }

    #[test]
    fn test_display() {
        let err = ProviderError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: not found");
        assert_eq!(
            ProviderError::NoData("Delhi".to_string()).to_string(),
            "No data for Delhi"
        );
    }
}
