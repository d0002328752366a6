//! OpenWeatherMap air pollution payloads
//!
//! Both `air_pollution` and `air_pollution/forecast` answer with the same
//! shape:
//!
//! ```json
//! {
//!   "coord": { "lon": 77.209, "lat": 28.6139 },
//!   "list": [
//!     {
//!       "dt": 1730635200,
//!       "main": { "aqi": 5 },
//!       "components": { "co": 1601.91, "no": 0.37, "no2": 50.04, "o3": 48.64,
//!                       "so2": 21.7, "pm2_5": 219.41, "pm10": 290.64, "nh3": 25.08 }
//!     }
//!   ]
//! }
//! ```

use aqi_domain::{PollutantReading, ProviderIndexLevel};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirPollutionResponse {
    #[serde(default)]
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirPollutionEntry {
    /// Unix timestamp (seconds, UTC)
    #[serde(default)]
    pub dt: i64,
    #[serde(default)]
    pub main: MainIndex,
    #[serde(default)]
    pub components: Components,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MainIndex {
    /// 1 (Good) to 5 (Very Poor); absent means 0
    #[serde(default)]
    pub aqi: u8,
}

/// Concentrations in µg/m³
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Components {
    pub co: Option<f64>,
    pub no: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
    pub so2: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub nh3: Option<f64>,
}

/// Error body returned alongside non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

impl AirPollutionEntry {
    /// Convert to a domain reading. Missing PM2.5 reads as 0.
    pub fn to_reading(&self) -> PollutantReading {
        let timestamp = DateTime::<Utc>::from_timestamp(self.dt, 0).unwrap_or_default();
        let c = &self.components;

        PollutantReading {
            timestamp,
            pm2_5: c.pm2_5.unwrap_or(0.0),
            pm10: c.pm10,
            co: c.co,
            no: c.no,
            no2: c.no2,
            o3: c.o3,
            so2: c.so2,
            nh3: c.nh3,
            provider_level: (self.main.aqi != 0)
                .then(|| ProviderIndexLevel::from_level(self.main.aqi)),
        }
    }
}

/// Pull a readable message out of an error body, falling back to the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "coord": { "lon": 77.209, "lat": 28.6139 },
        "list": [
            {
                "dt": 1730635200,
                "main": { "aqi": 5 },
                "components": {
                    "co": 1601.91, "no": 0.37, "no2": 50.04, "o3": 48.64,
                    "so2": 21.7, "pm2_5": 219.41, "pm10": 290.64, "nh3": 25.08
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let response: AirPollutionResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.list.len(), 1);

        let reading = response.list[0].to_reading();
        assert_eq!(reading.timestamp.timestamp(), 1730635200);
        assert_eq!(reading.pm2_5, 219.41);
        assert_eq!(reading.pm10, Some(290.64));
        assert_eq!(reading.nh3, Some(25.08));
        assert_eq!(reading.provider_level, Some(ProviderIndexLevel::VeryPoor));
        assert_eq!(reading.aqi().value(), 376);
    }

    #[test]
    fn test_missing_fields_default() {
        let response: AirPollutionResponse =
            serde_json::from_str(r#"{"list":[{"dt":0,"components":{"pm10":12.0}}]}"#).unwrap();
        let reading = response.list[0].to_reading();
        assert_eq!(reading.pm2_5, 0.0);
        assert_eq!(reading.pm10, Some(12.0));
        assert!(reading.co.is_none());
        assert!(reading.provider_level.is_none());
    }

    #[test]
    fn test_missing_list_is_empty() {
        let response: AirPollutionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.list.is_empty());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"cod":401,"message":"Invalid API key."}"#),
            "Invalid API key."
        );
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }
}
