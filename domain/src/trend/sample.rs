//! AQI sample value object

use crate::air::PollutantReading;
use crate::aqi::AqiValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of an AQI time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiSample {
    pub timestamp: DateTime<Utc>,
    pub aqi: AqiValue,
    pub pm2_5: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,
}

impl AqiSample {
    pub fn new(timestamp: DateTime<Utc>, aqi: AqiValue, pm2_5: f64) -> Self {
        Self {
            timestamp,
            aqi,
            pm2_5,
            pm10: None,
        }
    }

    pub fn with_pm10(mut self, pm10: f64) -> Self {
        self.pm10 = Some(pm10);
        self
    }

    /// Whether this sample falls in the "Good" range (AQI ≤ 50).
    pub fn is_good(&self) -> bool {
        self.aqi.value() <= 50
    }
}

impl From<&PollutantReading> for AqiSample {
    fn from(reading: &PollutantReading) -> Self {
        Self {
            timestamp: reading.timestamp,
            aqi: reading.aqi(),
            pm2_5: reading.pm2_5,
            pm10: reading.pm10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reading_converts_pm25() {
        let reading = PollutantReading::new(Utc::now(), 45.0).with_pm10(70.0);
        let sample = AqiSample::from(&reading);
        assert_eq!(sample.aqi.value(), 75);
        assert_eq!(sample.pm10, Some(70.0));
        assert!(!sample.is_good());
    }

    #[test]
    fn test_is_good_boundary() {
        let at_50 = AqiSample::new(Utc::now(), AqiValue::new(50), 30.0);
        let at_51 = AqiSample::new(Utc::now(), AqiValue::new(51), 30.6);
        assert!(at_50.is_good());
        assert!(!at_51.is_good());
    }
}
