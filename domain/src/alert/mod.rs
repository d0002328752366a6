//! Air quality alerts
//!
//! An [`AlertPolicy`] decides which assessments are severe enough to raise
//! an [`AirQualityAlert`].

use crate::assessment::AirQualityAssessment;
use crate::aqi::AqiValue;
use crate::city::City;
use crate::risk::{RiskCategory, SeverityTier};
use serde::{Deserialize, Serialize};

/// Threshold for raising alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPolicy {
    pub min_tier: SeverityTier,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            min_tier: SeverityTier::High,
        }
    }
}

impl AlertPolicy {
    pub fn new(min_tier: SeverityTier) -> Self {
        Self { min_tier }
    }

    pub fn should_alert(&self, tier: SeverityTier) -> bool {
        tier >= self.min_tier
    }

    /// Raise an alert for the assessment if its tier meets the threshold.
    pub fn evaluate(&self, assessment: &AirQualityAssessment) -> Option<AirQualityAlert> {
        if !self.should_alert(assessment.tier()) {
            return None;
        }

        let action = assessment.recommendation.primary_action();
        Some(AirQualityAlert {
            city: assessment.city,
            aqi: assessment.aqi,
            category: assessment.risk.category,
            tier: assessment.tier(),
            message: format!(
                "{} is {} (AQI {}). {}",
                assessment.city,
                assessment.category_label(),
                assessment.aqi,
                action
            ),
        })
    }
}

/// A raised alert for one city
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityAlert {
    pub city: City,
    pub aqi: AqiValue,
    pub category: RiskCategory,
    pub tier: SeverityTier,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::air::PollutantReading;
    use crate::assessment::DataSource;
    use chrono::Utc;

    fn assess(city: &str, pm25: f64) -> AirQualityAssessment {
        let city = City::find(city).unwrap();
        let reading = PollutantReading::new(Utc::now(), pm25);
        AirQualityAssessment::from_reading(city, reading, DataSource::Demo)
    }

    #[test]
    fn test_default_threshold_is_high() {
        let policy = AlertPolicy::default();
        assert!(!policy.should_alert(SeverityTier::Medium));
        assert!(policy.should_alert(SeverityTier::High));
        assert!(policy.should_alert(SeverityTier::VeryHigh));
    }

    #[test]
    fn test_no_alert_below_threshold() {
        let policy = AlertPolicy::default();
        assert!(policy.evaluate(&assess("Chennai", 28.0)).is_none());
    }

    #[test]
    fn test_alert_names_first_action() {
        let policy = AlertPolicy::default();
        let alert = policy.evaluate(&assess("Lucknow", 105.0)).unwrap();

        assert_eq!(alert.city.name, "Lucknow");
        assert_eq!(alert.aqi.value(), 250);
        assert_eq!(alert.category, RiskCategory::VeryUnhealthy);
        assert_eq!(alert.tier, SeverityTier::VeryHigh);
        assert!(alert.message.contains("Very Unhealthy"));
        assert!(alert.message.ends_with("Avoid outdoor activities"));
    }

    #[test]
    fn test_low_threshold_alerts_everything() {
        let policy = AlertPolicy::new(SeverityTier::Low);
        assert!(policy.evaluate(&assess("Chennai", 5.0)).is_some());
    }
}
