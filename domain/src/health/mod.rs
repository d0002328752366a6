//! Personal health risk
//!
//! Scales the city AQI by a [`HealthProfile`] into a 0–10 score:
//!
//! ```text
//! score = min(aqi / 100 × age_factor × health_factor × 10, 10)
//! ```

mod profile;

pub use profile::HealthProfile;

use crate::aqi::AqiValue;
use serde::Serialize;

const MAX_SCORE: f64 = 10.0;

/// Personal risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalRiskLevel {
    Low,
    Moderate,
    Elevated,
    High,
    VeryHigh,
}

impl PersonalRiskLevel {
    /// Band for a 0–10 score.
    pub fn from_score(score: f64) -> Self {
        if score < 2.0 {
            PersonalRiskLevel::Low
        } else if score < 4.0 {
            PersonalRiskLevel::Moderate
        } else if score < 6.0 {
            PersonalRiskLevel::Elevated
        } else if score < 8.0 {
            PersonalRiskLevel::High
        } else {
            PersonalRiskLevel::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PersonalRiskLevel::Low => "Low Risk",
            PersonalRiskLevel::Moderate => "Moderate Risk",
            PersonalRiskLevel::Elevated => "Elevated Risk",
            PersonalRiskLevel::High => "High Risk",
            PersonalRiskLevel::VeryHigh => "Very High Risk",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PersonalRiskLevel::Low => "#11998e",
            PersonalRiskLevel::Moderate => "#f7b731",
            PersonalRiskLevel::Elevated => "#ee5a6f",
            PersonalRiskLevel::High => "#eb3349",
            PersonalRiskLevel::VeryHigh => "#8e2de2",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PersonalRiskLevel::Low => "😊",
            PersonalRiskLevel::Moderate => "🙂",
            PersonalRiskLevel::Elevated => "😐",
            PersonalRiskLevel::High => "😷",
            PersonalRiskLevel::VeryHigh => "⚠️",
        }
    }

    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            PersonalRiskLevel::Low => &[
                "Safe to engage in outdoor activities",
                "No special precautions needed",
                "Maintain regular exercise routine",
            ],
            PersonalRiskLevel::Moderate => &[
                "Sensitive individuals should reduce prolonged outdoor exertion",
                "Consider wearing a mask if exercising outdoors",
                "Monitor symptoms if you have respiratory conditions",
            ],
            PersonalRiskLevel::Elevated => &[
                "Limit outdoor activities, especially if you're sensitive",
                "Wear N95 masks when going outside",
                "Keep windows closed and use air purifiers",
                "Monitor health symptoms closely",
            ],
            PersonalRiskLevel::High => &[
                "Avoid outdoor activities",
                "Stay indoors with air purification",
                "Wear high-quality masks if you must go out",
                "Consult doctor if experiencing symptoms",
                "Keep emergency medications handy",
            ],
            PersonalRiskLevel::VeryHigh => &[
                "Stay indoors at all times",
                "Seal windows and doors",
                "Use multiple air purifiers",
                "Seek immediate medical attention if symptoms worsen",
                "Consider temporary relocation if possible",
            ],
        }
    }
}

impl std::fmt::Display for PersonalRiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A scored personal risk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonalRisk {
    pub score: f64,
    pub level: PersonalRiskLevel,
}

impl PersonalRisk {
    pub fn assess(aqi: AqiValue, profile: &HealthProfile) -> Self {
        let base = aqi.value() as f64 / 100.0;
        let score = (base * profile.age_factor() * profile.health_factor() * 10.0).min(MAX_SCORE);
        Self {
            score,
            level: PersonalRiskLevel::from_score(score),
        }
    }
}
