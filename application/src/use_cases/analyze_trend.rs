//! Analyze trend use case
//!
//! Pulls a history series for a city, converts it to AQI samples and derives
//! the rolling summary and forecast.

use crate::config::FetchParams;
use crate::ports::air_quality_provider::ProviderError;
use crate::use_cases::shared::ReadingSource;
use aqi_domain::{AqiSample, City, DataSource, Forecast, TrendSummary};
use serde::Serialize;
use tracing::{info, warn};

/// Trend analysis for one city
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub city: City,
    pub source: DataSource,
    pub samples: Vec<AqiSample>,
    pub summary: Option<TrendSummary>,
    pub forecast: Option<Forecast>,
}

impl TrendReport {
    pub fn latest(&self) -> Option<&AqiSample> {
        self.samples.last()
    }
}

/// Use case for analysing a city's AQI history
pub struct AnalyzeTrendUseCase {
    source: ReadingSource,
}

impl AnalyzeTrendUseCase {
    pub fn new(source: ReadingSource) -> Self {
        Self { source }
    }

    pub async fn execute(
        &self,
        city: &City,
        params: &FetchParams,
    ) -> Result<TrendReport, ProviderError> {
        let (readings, source) = self.source.series(city, params.history_points).await?;
        let samples: Vec<AqiSample> = readings.iter().map(AqiSample::from).collect();

        let summary = TrendSummary::from_samples(&samples, params.trend_window);
        let forecast = Forecast::project(&samples, params.forecast_days, params.forecast_lookback);
        if forecast.is_none() {
            warn!(
                "Not enough history for a forecast for {} ({} samples)",
                city,
                samples.len()
            );
        }

        info!(
            "Trend for {}: {} samples from {} data",
            city,
            samples.len(),
            source
        );

        Ok(TrendReport {
            city: *city,
            source,
            samples,
            summary,
            forecast,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::shared::mocks::MockProvider;
    use std::sync::Arc;

    fn pune() -> City {
        City::find("Pune").unwrap()
    }

    #[tokio::test]
    async fn test_trend_report_from_live_series() {
        let live = Arc::new(MockProvider::live().with_pm25("Pune", 45.0));
        let source = ReadingSource::new(Arc::new(MockProvider::demo())).with_primary(live);
        let params = FetchParams::default().with_history_points(20);

        let report = AnalyzeTrendUseCase::new(source)
            .execute(&pune(), &params)
            .await
            .unwrap();

        assert_eq!(report.source, DataSource::Live);
        assert_eq!(report.samples.len(), 20);
        assert_eq!(report.latest().unwrap().aqi.value(), 75);

        let summary = report.summary.unwrap();
        assert_eq!(summary.window, 7);
        assert!((summary.average - 75.0).abs() < 1e-9);

        let forecast = report.forecast.unwrap();
        assert_eq!(forecast.points.len(), 7);
        assert_eq!(forecast.points[0].predicted, 75.0);
        assert_eq!(forecast.baseline_std, 0.0);
    }

    #[tokio::test]
    async fn test_single_reading_live_series_uses_demo() {
        let live = Arc::new(MockProvider::live().with_series_len(1));
        let source = ReadingSource::new(Arc::new(MockProvider::demo())).with_primary(live);

        let report = AnalyzeTrendUseCase::new(source)
            .execute(&pune(), &FetchParams::default())
            .await
            .unwrap();

        assert_eq!(report.source, DataSource::Demo);
        assert_eq!(report.samples.len(), 90);
    }

    #[tokio::test]
    async fn test_one_point_history_has_no_forecast() {
        let source = ReadingSource::new(Arc::new(MockProvider::demo()));
        let params = FetchParams::default().with_history_points(1);

        let report = AnalyzeTrendUseCase::new(source)
            .execute(&pune(), &params)
            .await
            .unwrap();

        assert_eq!(report.samples.len(), 1);
        assert!(report.summary.is_some());
        assert!(report.forecast.is_none());
    }
}
