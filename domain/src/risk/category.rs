//! Risk category value object

use super::tier::SeverityTier;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Health risk category on the AQI scale (Value Object)
///
/// Each variant owns an inclusive AQI upper bound, a display colour and a
/// severity tier. The bounds partition 0–500 with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl RiskCategory {
    /// All categories in ascending order of severity.
    pub const ALL: [RiskCategory; 6] = [
        RiskCategory::Good,
        RiskCategory::Moderate,
        RiskCategory::UnhealthyForSensitive,
        RiskCategory::Unhealthy,
        RiskCategory::VeryUnhealthy,
        RiskCategory::Hazardous,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Good => "Good",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            RiskCategory::Unhealthy => "Unhealthy",
            RiskCategory::VeryUnhealthy => "Very Unhealthy",
            RiskCategory::Hazardous => "Hazardous",
        }
    }

    /// Display colour as a hex token.
    pub fn color(&self) -> &'static str {
        match self {
            RiskCategory::Good => "#11998e",
            RiskCategory::Moderate => "#f7b731",
            RiskCategory::UnhealthyForSensitive => "#ee5a6f",
            RiskCategory::Unhealthy => "#eb3349",
            RiskCategory::VeryUnhealthy => "#c0392b",
            RiskCategory::Hazardous => "#8e2de2",
        }
    }

    pub fn tier(&self) -> SeverityTier {
        match self {
            RiskCategory::Good | RiskCategory::Moderate => SeverityTier::Low,
            RiskCategory::UnhealthyForSensitive => SeverityTier::Medium,
            RiskCategory::Unhealthy => SeverityTier::High,
            RiskCategory::VeryUnhealthy | RiskCategory::Hazardous => SeverityTier::VeryHigh,
        }
    }

    /// Inclusive upper AQI bound; `None` for the open-ended top category.
    pub fn upper_bound(&self) -> Option<u32> {
        match self {
            RiskCategory::Good => Some(50),
            RiskCategory::Moderate => Some(100),
            RiskCategory::UnhealthyForSensitive => Some(150),
            RiskCategory::Unhealthy => Some(200),
            RiskCategory::VeryUnhealthy => Some(300),
            RiskCategory::Hazardous => None,
        }
    }

    /// Inclusive lower AQI bound.
    pub fn lower_bound(&self) -> u32 {
        match self {
            RiskCategory::Good => 0,
            RiskCategory::Moderate => 51,
            RiskCategory::UnhealthyForSensitive => 101,
            RiskCategory::Unhealthy => 151,
            RiskCategory::VeryUnhealthy => 201,
            RiskCategory::Hazardous => 301,
        }
    }

    /// Whether an AQI value falls inside this category's range.
    pub fn contains(&self, aqi: u32) -> bool {
        aqi >= self.lower_bound() && self.upper_bound().is_none_or(|upper| aqi <= upper)
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for RiskCategory {
    type Err = DomainError;

    /// Strict parse of a category label (case-insensitive).
    ///
    /// Accepts the short "Unhealthy for Sensitive" label as well as the
    /// canonical one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(RiskCategory::Good),
            "moderate" => Ok(RiskCategory::Moderate),
            "unhealthy for sensitive groups" | "unhealthy for sensitive" => {
                Ok(RiskCategory::UnhealthyForSensitive)
            }
            "unhealthy" => Ok(RiskCategory::Unhealthy),
            "very unhealthy" => Ok(RiskCategory::VeryUnhealthy),
            "hazardous" => Ok(RiskCategory::Hazardous),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}
