//! PM2.5 to AQI conversion
//!
//! The national scale is piecewise linear over five bounded segments plus an
//! open-ended severe segment:
//!
//! ```text
//! PM2.5 (µg/m³)   AQI
//!   0 –  30      0 –  50
//!  30 –  60     50 – 100
//!  60 –  90    100 – 200
//!  90 – 120    200 – 300
//! 120 – 250    300 – 400
//!   > 250      400 + min((pm25 - 250) / 2, 100)
//! ```
//!
//! Only PM2.5 drives the index; other pollutants are display-only.

pub mod breakpoints;
mod value;

pub use value::AqiValue;

use breakpoints::{BREAKPOINTS, SEVERE_AQI_FLOOR, SEVERE_PM25_FLOOR, SEVERE_PM25_PER_POINT};

/// Convert a PM2.5 concentration (µg/m³) to an AQI value.
///
/// Negative and NaN concentrations are treated as 0. The result is
/// truncated toward zero and capped at 500, so `+∞` maps to 500.
///
/// # Example
///
/// ```
/// use aqi_domain::compute_aqi;
///
/// assert_eq!(compute_aqi(30.0).value(), 50);
/// assert_eq!(compute_aqi(75.0).value(), 150);
/// assert_eq!(compute_aqi(1000.0).value(), 500);
/// ```
pub fn compute_aqi(pm25: f64) -> AqiValue {
    let pm25 = if pm25.is_nan() { 0.0 } else { pm25.max(0.0) };

    let raw = match BREAKPOINTS.iter().find(|segment| segment.contains(pm25)) {
        Some(segment) => segment.interpolate(pm25),
        None => {
            let excess = (pm25 - SEVERE_PM25_FLOOR) / SEVERE_PM25_PER_POINT;
            SEVERE_AQI_FLOOR as f64 + excess.min(100.0)
        }
    };

    AqiValue::new(raw as u32)
}
