//! Fetch configuration from TOML (`[fetch]` section)

use aqi_application::FetchParams;
use crate::cache::default_cache_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Seconds a cached reading stays fresh (0 disables the cache)
    pub cache_ttl_seconds: u64,
    /// Where cached readings are kept between runs (defaults to the user cache dir)
    pub cache_dir: Option<PathBuf>,
    /// Pause between cities in a survey
    pub rate_limit_millis: u64,
    /// Readings requested for trend analysis
    pub history_points: usize,
    /// Trailing samples in the trend summary
    pub trend_window: usize,
    /// Days of forecast
    pub forecast_days: usize,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        let params = FetchParams::default();
        Self {
            cache_ttl_seconds: 300,
            cache_dir: None,
            rate_limit_millis: params.rate_limit.as_millis() as u64,
            history_points: params.history_points,
            trend_window: params.trend_window,
            forecast_days: params.forecast_days,
        }
    }
}

impl FileFetchConfig {
    pub fn to_fetch_params(&self) -> FetchParams {
        FetchParams::default()
            .with_rate_limit(Duration::from_millis(self.rate_limit_millis))
            .with_history_points(self.history_points)
            .with_trend_window(self.trend_window)
            .with_forecast_days(self.forecast_days)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// The configured cache directory, else the platform default.
    pub fn resolve_cache_dir(&self) -> Option<PathBuf> {
        self.cache_dir
            .clone()
            .or_else(default_cache_dir)
    }
}
