//! OpenWeatherMap HTTP client
//!
//! Implements [`AirQualityProvider`] over the air pollution endpoints.

use super::error::{OpenWeatherError, Result};
use super::protocol::{AirPollutionResponse, error_message};
use crate::config::FileOpenWeatherConfig;
use aqi_application::{AirQualityProvider, ProviderError};
use aqi_domain::{City, DataSource, PollutantReading};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

const CURRENT_ENDPOINT: &str = "air_pollution";
const FORECAST_ENDPOINT: &str = "air_pollution/forecast";

/// Live readings from the OpenWeatherMap air pollution API
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("aqi-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OpenWeatherError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Build a client from the `[openweather]` section.
    ///
    /// Fails with [`OpenWeatherError::MissingApiKey`] when neither the
    /// configured environment variable nor the file carries a key.
    pub fn from_config(config: &FileOpenWeatherConfig) -> Result<Self> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| OpenWeatherError::MissingApiKey(config.api_key_env.clone()))?;

        Self::new(
            api_key,
            config.base_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    async fn fetch(&self, endpoint: &str, city: &City) -> Result<AirPollutionResponse> {
        debug!("GET {} for {}", endpoint, city);

        let response = self
            .http
            .get(self.endpoint_url(endpoint))
            .query(&[
                ("lat", city.lat.to_string()),
                ("lon", city.lon.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenWeatherError::Http {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| OpenWeatherError::ParseError(e.to_string()))
    }

    async fn fetch_current(&self, city: &City) -> Result<PollutantReading> {
        let response = self.fetch(CURRENT_ENDPOINT, city).await?;
        response
            .list
            .first()
            .map(|entry| entry.to_reading())
            .ok_or_else(|| OpenWeatherError::EmptyList(city.name.to_string()))
    }

    async fn fetch_series(&self, city: &City, points: usize) -> Result<Vec<PollutantReading>> {
        let mut readings = vec![self.fetch_current(city).await?];

        let forecast = self.fetch(FORECAST_ENDPOINT, city).await?;
        readings.extend(forecast.list.iter().map(|entry| entry.to_reading()));
        readings.truncate(points);

        debug!("{} readings for {}", readings.len(), city);
        Ok(readings)
    }
}

#[async_trait]
impl AirQualityProvider for OpenWeatherClient {
    fn name(&self) -> &str {
        "openweather"
    }

    fn source(&self) -> DataSource {
        DataSource::Live
    }

    async fn current(&self, city: &City) -> std::result::Result<PollutantReading, ProviderError> {
        self.fetch_current(city).await.map_err(ProviderError::from)
    }

    async fn series(
        &self,
        city: &City,
        points: usize,
    ) -> std::result::Result<Vec<PollutantReading>, ProviderError> {
        self.fetch_series(city, points)
            .await
            .map_err(ProviderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn test_endpoint_url() {
        let client =
            OpenWeatherClient::new("key", DEFAULT_BASE_URL, Duration::from_secs(10)).unwrap();
        assert_eq!(
            client.endpoint_url(CURRENT_ENDPOINT),
            "http://api.openweathermap.org/data/2.5/air_pollution"
        );
        assert_eq!(
            client.endpoint_url(FORECAST_ENDPOINT),
            "http://api.openweathermap.org/data/2.5/air_pollution/forecast"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = OpenWeatherClient::new("key", "http://localhost:8080/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(
            client.endpoint_url(CURRENT_ENDPOINT),
            "http://localhost:8080/air_pollution"
        );
    }

    #[test]
    fn test_from_config_without_key() {
        let config = FileOpenWeatherConfig {
            api_key_env: "AQI_TEST_UNSET_OPENWEATHER_KEY".to_string(),
            api_key: None,
            ..Default::default()
        };
        let err = OpenWeatherClient::from_config(&config).err().unwrap();
        assert!(matches!(err, OpenWeatherError::MissingApiKey(ref var) if var == "AQI_TEST_UNSET_OPENWEATHER_KEY"));
    }

    #[test]
    fn test_from_config_with_file_key() {
        let config = FileOpenWeatherConfig {
            api_key_env: "AQI_TEST_UNSET_OPENWEATHER_KEY".to_string(),
            api_key: Some("abc".to_string()),
            ..Default::default()
        };
        let client = OpenWeatherClient::from_config(&config).unwrap();
        assert_eq!(client.name(), "openweather");
        assert_eq!(client.source(), DataSource::Live);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_provider_error() {
        // Port 9 (discard) on localhost is closed on test machines.
        let client =
            OpenWeatherClient::new("key", "http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let city = City::find("Delhi").unwrap();
        let err = client.current(&city).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Request(_) | ProviderError::Timeout
        ));
    }
}
