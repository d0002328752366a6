//! Shared utilities for use cases.
//!
//! Contains [`ReadingSource`], the primary-with-fallback reading lookup used
//! by every use case (AssessCity, SurveyCities, AnalyzeTrend, PersonalRisk).

use crate::ports::air_quality_provider::{AirQualityProvider, ProviderError};
use aqi_domain::{City, DataSource, PollutantReading};
use std::sync::Arc;
use tracing::{debug, warn};

/// Minimum readings a series needs before it is worth analysing
pub(crate) const MIN_SERIES_LEN: usize = 2;

/// Reading lookup that prefers a primary provider and degrades to a fallback.
///
/// The primary is usually the live API client and the fallback the demo
/// provider. When there is no primary, or it fails, a warning is logged and
/// the fallback answers instead. Every result reports the [`DataSource`]
/// that actually produced it.
#[derive(Clone)]
pub struct ReadingSource {
    primary: Option<Arc<dyn AirQualityProvider>>,
    fallback: Arc<dyn AirQualityProvider>,
}

impl ReadingSource {
    /// A source that only uses `fallback` until a primary is attached.
    pub fn new(fallback: Arc<dyn AirQualityProvider>) -> Self {
        Self {
            primary: None,
            fallback,
        }
    }

    pub fn with_primary(mut self, primary: Arc<dyn AirQualityProvider>) -> Self {
        self.primary = Some(primary);
        self
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Latest reading for a city.
    pub async fn current(
        &self,
        city: &City,
    ) -> Result<(PollutantReading, DataSource), ProviderError> {
        if let Some(primary) = &self.primary {
            match primary.current(city).await {
                Ok(reading) => {
                    debug!("{} answered for {}", primary.name(), city);
                    return Ok((reading, primary.source()));
                }
                Err(e) => warn!(
                    "{} failed for {}: {}; using {}",
                    primary.name(),
                    city,
                    e,
                    self.fallback.name()
                ),
            }
        }

        let reading = self.fallback.current(city).await?;
        Ok((reading, self.fallback.source()))
    }

    /// Up to `points` readings for a city.
    ///
    /// A primary series shorter than two readings is treated as a failure.
    pub async fn series(
        &self,
        city: &City,
        points: usize,
    ) -> Result<(Vec<PollutantReading>, DataSource), ProviderError> {
        if let Some(primary) = &self.primary {
            match primary.series(city, points).await {
                Ok(readings) if readings.len() >= MIN_SERIES_LEN.min(points) => {
                    debug!(
                        "{} returned {} readings for {}",
                        primary.name(),
                        readings.len(),
                        city
                    );
                    return Ok((readings, primary.source()));
                }
                Ok(readings) => warn!(
                    "{} returned only {} readings for {}; using {}",
                    primary.name(),
                    readings.len(),
                    city,
                    self.fallback.name()
                ),
                Err(e) => warn!(
                    "{} failed for {}: {}; using {}",
                    primary.name(),
                    city,
                    e,
                    self.fallback.name()
                ),
            }
        }

        let readings = self.fallback.series(city, points).await?;
        Ok((readings, self.fallback.source()))
    }
}

#[cfg(test)]
pub(crate) mod mocks {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Provider returning fixed PM2.5 per city, or a fixed error.
    pub(crate) struct MockProvider {
        name: &'static str,
        source: DataSource,
        pm25: HashMap<&'static str, f64>,
        default_pm25: f64,
        error: Option<ProviderError>,
        series_len: Option<usize>,
        pub(crate) calls: Mutex<Vec<String>>,
    }

    impl MockProvider {
        pub(crate) fn new(name: &'static str, source: DataSource) -> Self {
            Self {
                name,
                source,
                pm25: HashMap::new(),
                default_pm25: 20.0,
                error: None,
                series_len: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn live() -> Self {
            Self::new("mock-live", DataSource::Live)
        }

        pub(crate) fn demo() -> Self {
            Self::new("mock-demo", DataSource::Demo)
        }

        pub(crate) fn with_pm25(mut self, city: &'static str, pm25: f64) -> Self {
            self.pm25.insert(city, pm25);
            self
        }

        pub(crate) fn with_default_pm25(mut self, pm25: f64) -> Self {
            self.default_pm25 = pm25;
            self
        }

        pub(crate) fn failing(mut self, error: ProviderError) -> Self {
            self.error = Some(error);
            self
        }

        /// Cap every series at `len` readings regardless of the request.
        pub(crate) fn with_series_len(mut self, len: usize) -> Self {
            self.series_len = Some(len);
            self
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn pm25_for(&self, city: &City) -> f64 {
            self.pm25.get(city.name).copied().unwrap_or(self.default_pm25)
        }
    }

    #[async_trait]
    impl AirQualityProvider for MockProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn source(&self) -> DataSource {
            self.source
        }

        async fn current(&self, city: &City) -> Result<PollutantReading, ProviderError> {
            self.calls.lock().unwrap().push(format!("current:{}", city));
            if let Some(e) = &self.error {
                return Err(e.clone());
            }
            let at = Utc.with_ymd_and_hms(2024, 11, 3, 12, 0, 0).unwrap();
            Ok(PollutantReading::new(at, self.pm25_for(city)))
        }

        async fn series(
            &self,
            city: &City,
            points: usize,
        ) -> Result<Vec<PollutantReading>, ProviderError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("series:{}:{}", city, points));
            if let Some(e) = &self.error {
                return Err(e.clone());
            }
            let len = self.series_len.map_or(points, |cap| cap.min(points));
            let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let pm25 = self.pm25_for(city);
            Ok((0..len)
                .map(|i| PollutantReading::new(start + Duration::days(i as i64), pm25))
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::MockProvider;
    use super::*;

    fn delhi() -> City {
        City::find("Delhi").unwrap()
    }

    #[tokio::test]
    async fn test_primary_answers() {
        let primary = Arc::new(MockProvider::live().with_pm25("Delhi", 75.0));
        let fallback = Arc::new(MockProvider::demo());
        let source = ReadingSource::new(fallback.clone()).with_primary(primary);

        let (reading, from) = source.current(&delhi()).await.unwrap();
        assert_eq!(reading.pm2_5, 75.0);
        assert_eq!(from, DataSource::Live);
        assert_eq!(fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_falls_back() {
        let primary = Arc::new(MockProvider::live().failing(ProviderError::Timeout));
        let fallback = Arc::new(MockProvider::demo().with_pm25("Delhi", 88.0));
        let source = ReadingSource::new(fallback).with_primary(primary.clone());

        let (reading, from) = source.current(&delhi()).await.unwrap();
        assert_eq!(reading.pm2_5, 88.0);
        assert_eq!(from, DataSource::Demo);
        assert_eq!(primary.call_count(), 1);
    }

    #[tokio::test]
    async fn test_without_primary() {
        let source = ReadingSource::new(Arc::new(MockProvider::demo()));
        assert!(!source.has_primary());
        let (_, from) = source.current(&delhi()).await.unwrap();
        assert_eq!(from, DataSource::Demo);
    }

    #[tokio::test]
    async fn test_short_series_falls_back() {
        let primary = Arc::new(MockProvider::live().with_series_len(1));
        let source = ReadingSource::new(Arc::new(MockProvider::demo())).with_primary(primary);

        let (readings, from) = source.series(&delhi(), 30).await.unwrap();
        assert_eq!(from, DataSource::Demo);
        assert_eq!(readings.len(), 30);
    }

    #[tokio::test]
    async fn test_full_series_from_primary() {
        let primary = Arc::new(MockProvider::live());
        let source = ReadingSource::new(Arc::new(MockProvider::demo())).with_primary(primary);

        let (readings, from) = source.series(&delhi(), 10).await.unwrap();
        assert_eq!(from, DataSource::Live);
        assert_eq!(readings.len(), 10);
    }

    #[tokio::test]
    async fn test_fallback_error_propagates() {
        let source = ReadingSource::new(Arc::new(
            MockProvider::demo().failing(ProviderError::NoData("Delhi".to_string())),
        ));
        let err = source.current(&delhi()).await.unwrap_err();
        assert_eq!(err, ProviderError::NoData("Delhi".to_string()));
    }
}
