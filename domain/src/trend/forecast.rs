//! Naive AQI projection
//!
//! A flat projection from the recent mean with a small upward drift, banded
//! by one sample standard deviation. Good enough for a dashboard hint; it is
//! not a model.

use super::sample::AqiSample;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Default number of trailing samples the projection is based on
pub const DEFAULT_FORECAST_LOOKBACK: usize = 30;

/// Default number of projected days
pub const DEFAULT_FORECAST_DAYS: usize = 7;

/// AQI added per projected day
const DAILY_DRIFT: f64 = 2.0;

const AQI_CEILING: f64 = 500.0;

/// One projected day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: DateTime<Utc>,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Projected AQI for the days after a series ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub baseline_mean: f64,
    pub baseline_std: f64,
    pub points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Project `days` points past the last sample from the trailing
    /// `lookback` samples. Needs at least two samples for a deviation.
    pub fn project(samples: &[AqiSample], days: usize, lookback: usize) -> Option<Self> {
        let last = samples.last()?;
        let lookback = lookback.max(2).min(samples.len());
        if lookback < 2 {
            return None;
        }

        let values: Vec<f64> = samples[samples.len() - lookback..]
            .iter()
            .map(|s| s.aqi.value() as f64)
            .collect();

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let std = variance.sqrt();

        let points = (0..days)
            .map(|i| {
                let predicted = mean + DAILY_DRIFT * i as f64;
                ForecastPoint {
                    date: last.timestamp + Duration::days(i as i64 + 1),
                    predicted: clamp_aqi(predicted),
                    lower: clamp_aqi(predicted - std),
                    upper: clamp_aqi(predicted + std),
                }
            })
            .collect();

        Some(Self {
            baseline_mean: mean,
            baseline_std: std,
            points,
        })
    }
}

fn clamp_aqi(value: f64) -> f64 {
    value.clamp(0.0, AQI_CEILING)
}
