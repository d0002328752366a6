//! Air quality assessment for a single city
//!
//! Composes the core pipeline: reading → AQI → risk → recommendation.

use crate::air::PollutantReading;
use crate::aqi::AqiValue;
use crate::city::City;
use crate::recommendation::{Recommendation, recommendations_for};
use crate::risk::{RiskAssessment, SeverityTier};
use serde::{Deserialize, Serialize};

/// Where a reading came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Fetched from the live pollution API
    Live,
    /// Generated by the synthetic demo provider
    Demo,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Live => "live",
            DataSource::Demo => "demo",
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, DataSource::Demo)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the dashboard shows for one city (Entity)
#[derive(Debug, Clone, Serialize)]
pub struct AirQualityAssessment {
    pub city: City,
    pub reading: PollutantReading,
    pub aqi: AqiValue,
    pub risk: RiskAssessment,
    pub recommendation: &'static Recommendation,
    pub source: DataSource,
}

impl AirQualityAssessment {
    pub fn from_reading(city: City, reading: PollutantReading, source: DataSource) -> Self {
        let aqi = reading.aqi();
        let risk = aqi.risk();
        Self {
            city,
            reading,
            aqi,
            risk,
            recommendation: recommendations_for(risk.category),
            source,
        }
    }

    pub fn tier(&self) -> SeverityTier {
        self.risk.tier
    }

    pub fn category_label(&self) -> &'static str {
        self.risk.label()
    }
}
