//! Rolling summary over the most recent samples

use super::sample::AqiSample;
use crate::aqi::AqiValue;
use serde::Serialize;

/// Default number of trailing samples summarised
pub const DEFAULT_TREND_WINDOW: usize = 7;

/// Statistics over the last `window` samples of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    /// Number of samples actually summarised (≤ requested window)
    pub window: usize,
    pub average: f64,
    pub max: AqiValue,
    pub min: AqiValue,
    /// Samples with AQI ≤ 50
    pub good_count: usize,
}

impl TrendSummary {
    /// Summarise the trailing `window` samples. Returns `None` when there is
    /// nothing to summarise.
    pub fn from_samples(samples: &[AqiSample], window: usize) -> Option<Self> {
        let window = window.max(1).min(samples.len());
        let recent = &samples[samples.len() - window..];

        let max = recent.iter().map(|s| s.aqi).max()?;
        let min = recent.iter().map(|s| s.aqi).min()?;
        let total: u32 = recent.iter().map(|s| s.aqi.value()).sum();

        Some(Self {
            window,
            average: total as f64 / window as f64,
            max,
            min,
            good_count: recent.iter().filter(|s| s.is_good()).count(),
        })
    }
}
