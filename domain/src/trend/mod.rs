//! AQI time series: samples, rolling summaries and a naive forecast

mod forecast;
mod sample;
mod summary;

pub use forecast::{DEFAULT_FORECAST_DAYS, DEFAULT_FORECAST_LOOKBACK, Forecast, ForecastPoint};
pub use sample::AqiSample;
pub use summary::{DEFAULT_TREND_WINDOW, TrendSummary};
