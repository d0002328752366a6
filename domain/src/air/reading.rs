//! Pollutant reading value object

use super::index_level::ProviderIndexLevel;
use crate::aqi::{AqiValue, compute_aqi};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw pollutant concentrations at a point in time (Value Object)
///
/// All concentrations are in µg/m³. Only PM2.5 feeds the AQI; the rest are
/// carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    pub timestamp: DateTime<Utc>,
    pub pm2_5: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pm10: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub o3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub so2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nh3: Option<f64>,
    /// The source's own coarse index, when it reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_level: Option<ProviderIndexLevel>,
}

impl PollutantReading {
    /// Create a reading with only PM2.5 set.
    pub fn new(timestamp: DateTime<Utc>, pm2_5: f64) -> Self {
        Self {
            timestamp,
            pm2_5,
            pm10: None,
            co: None,
            no: None,
            no2: None,
            o3: None,
            so2: None,
            nh3: None,
            provider_level: None,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_pm10(mut self, value: f64) -> Self {
        self.pm10 = Some(value);
        self
    }

    pub fn with_co(mut self, value: f64) -> Self {
        self.co = Some(value);
        self
    }

    pub fn with_no(mut self, value: f64) -> Self {
        self.no = Some(value);
        self
    }

    pub fn with_no2(mut self, value: f64) -> Self {
        self.no2 = Some(value);
        self
    }

    pub fn with_o3(mut self, value: f64) -> Self {
        self.o3 = Some(value);
        self
    }

    pub fn with_so2(mut self, value: f64) -> Self {
        self.so2 = Some(value);
        self
    }

    pub fn with_nh3(mut self, value: f64) -> Self {
        self.nh3 = Some(value);
        self
    }

    pub fn with_provider_level(mut self, level: ProviderIndexLevel) -> Self {
        self.provider_level = Some(level);
        self
    }

    // ==================== Derived Values ====================

    /// AQI computed from this reading's PM2.5.
    pub fn aqi(&self) -> AqiValue {
        compute_aqi(self.pm2_5)
    }

    /// `(label, value)` pairs for every pollutant present, PM2.5 first.
    pub fn components(&self) -> Vec<(&'static str, f64)> {
        let optional = [
            ("PM10", self.pm10),
            ("CO", self.co),
            ("NO", self.no),
            ("NO2", self.no2),
            ("O3", self.o3),
            ("SO2", self.so2),
            ("NH3", self.nh3),
        ];

        std::iter::once(("PM2.5", self.pm2_5))
            .chain(
                optional
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|v| (label, v))),
            )
            .collect()
    }
}
