//! Provider-reported coarse index level

use serde::{Deserialize, Serialize};

/// OpenWeatherMap's own 1–5 air quality level.
///
/// Display-only: the dashboard's AQI always comes from the PM2.5 conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderIndexLevel {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
    Unknown,
}

impl ProviderIndexLevel {
    /// Map the numeric level; anything outside 1–5 is `Unknown`.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => ProviderIndexLevel::Good,
            2 => ProviderIndexLevel::Fair,
            3 => ProviderIndexLevel::Moderate,
            4 => ProviderIndexLevel::Poor,
            5 => ProviderIndexLevel::VeryPoor,
            _ => ProviderIndexLevel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderIndexLevel::Good => "Good",
            ProviderIndexLevel::Fair => "Fair",
            ProviderIndexLevel::Moderate => "Moderate",
            ProviderIndexLevel::Poor => "Poor",
            ProviderIndexLevel::VeryPoor => "Very Poor",
            ProviderIndexLevel::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ProviderIndexLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_level() {
        assert_eq!(ProviderIndexLevel::from_level(1), ProviderIndexLevel::Good);
        assert_eq!(ProviderIndexLevel::from_level(5), ProviderIndexLevel::VeryPoor);
        assert_eq!(ProviderIndexLevel::from_level(0), ProviderIndexLevel::Unknown);
        assert_eq!(ProviderIndexLevel::from_level(9), ProviderIndexLevel::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(ProviderIndexLevel::VeryPoor.to_string(), "Very Poor");
    }
}
