//! Fetch parameters — data retrieval and analysis control.
//!
//! [`FetchParams`] groups the static parameters that control how use cases
//! pull readings and how much history they analyse. These are
//! application-layer concerns, not domain policy.

use aqi_domain::trend::{DEFAULT_FORECAST_DAYS, DEFAULT_FORECAST_LOOKBACK, DEFAULT_TREND_WINDOW};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Data retrieval parameters.
///
/// | Use case        | Uses                                   |
/// |-----------------|----------------------------------------|
/// | Survey          | `rate_limit`                           |
/// | Trend           | `history_points`, `trend_window`, `forecast_*` |
/// | City / Health   | none                                   |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchParams {
    /// Pause between consecutive cities in a survey.
    pub rate_limit: Duration,
    /// Number of readings requested for a trend series.
    pub history_points: usize,
    /// Trailing samples summarised in a trend report.
    pub trend_window: usize,
    /// Days projected by the forecast.
    pub forecast_days: usize,
    /// Trailing samples the forecast baseline is computed from.
    pub forecast_lookback: usize,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            rate_limit: Duration::from_millis(100),
            history_points: 90,
            trend_window: DEFAULT_TREND_WINDOW,
            forecast_days: DEFAULT_FORECAST_DAYS,
            forecast_lookback: DEFAULT_FORECAST_LOOKBACK,
        }
    }
}

impl FetchParams {
    // ==================== Builder Methods ====================

    pub fn with_rate_limit(mut self, rate_limit: Duration) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    pub fn with_history_points(mut self, points: usize) -> Self {
        self.history_points = points;
        self
    }

    pub fn with_trend_window(mut self, window: usize) -> Self {
        self.trend_window = window;
        self
    }

    pub fn with_forecast_days(mut self, days: usize) -> Self {
        self.forecast_days = days;
        self
    }

    pub fn with_forecast_lookback(mut self, lookback: usize) -> Self {
        self.forecast_lookback = lookback;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = FetchParams::default();
        assert_eq!(params.rate_limit, Duration::from_millis(100));
        assert_eq!(params.history_points, 90);
        assert_eq!(params.trend_window, 7);
        assert_eq!(params.forecast_days, 7);
        assert_eq!(params.forecast_lookback, 30);
    }

    #[test]
    fn test_builder_chain() {
        let params = FetchParams::default()
            .with_rate_limit(Duration::ZERO)
            .with_history_points(30)
            .with_trend_window(14)
            .with_forecast_days(3)
            .with_forecast_lookback(10);

        assert_eq!(params.rate_limit, Duration::ZERO);
        assert_eq!(params.history_points, 30);
        assert_eq!(params.trend_window, 14);
        assert_eq!(params.forecast_days, 3);
        assert_eq!(params.forecast_lookback, 10);
    }
}
