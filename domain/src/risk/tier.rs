//! Severity tier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Coarse severity bucket derived from a risk category.
///
/// Ordered from least to most severe, so tiers can be compared against an
/// alerting threshold directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityTier {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Low => "low",
            SeverityTier::Medium => "medium",
            SeverityTier::High => "high",
            SeverityTier::VeryHigh => "very-high",
        }
    }

    /// CSS-style class token used by renderers (`risk-low`, ...).
    pub fn css_class(&self) -> &'static str {
        match self {
            SeverityTier::Low => "risk-low",
            SeverityTier::Medium => "risk-medium",
            SeverityTier::High => "risk-high",
            SeverityTier::VeryHigh => "risk-very-high",
        }
    }
}

impl Default for SeverityTier {
    fn default() -> Self {
        Self::Low
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SeverityTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "low" => Ok(SeverityTier::Low),
            "medium" => Ok(SeverityTier::Medium),
            "high" => Ok(SeverityTier::High),
            "very-high" | "veryhigh" => Ok(SeverityTier::VeryHigh),
            _ => Err(DomainError::UnknownTier(s.to_string())),
        }
    }
}
