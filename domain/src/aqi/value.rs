//! AQI value object

use super::breakpoints::AQI_MAX;
use crate::risk::{RiskAssessment, classify_risk};
use serde::{Deserialize, Serialize};

/// An air quality index on the 0–500 scale (Value Object)
///
/// Construction always caps at 500, so a held `AqiValue` is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AqiValue(u16);

impl AqiValue {
    /// Create a value, capping anything above 500.
    pub fn new(value: u32) -> Self {
        Self(value.min(AQI_MAX) as u16)
    }

    /// Highest representable value.
    pub fn max() -> Self {
        Self(AQI_MAX as u16)
    }

    pub fn value(&self) -> u32 {
        self.0 as u32
    }

    /// Classify this value with the canonical risk table.
    pub fn risk(&self) -> RiskAssessment {
        classify_risk(self.value())
    }
}

impl From<AqiValue> for u32 {
    fn from(aqi: AqiValue) -> Self {
        aqi.value()
    }
}

impl std::fmt::Display for AqiValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
