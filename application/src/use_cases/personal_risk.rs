//! Personal risk use case
//!
//! Combines a city assessment with a [`HealthProfile`] into a personal
//! 0–10 risk score and advice.

use crate::ports::air_quality_provider::ProviderError;
use crate::use_cases::assess_city::AssessCityUseCase;
use crate::use_cases::shared::ReadingSource;
use aqi_domain::{AirQualityAssessment, City, HealthProfile, PersonalRisk};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct PersonalRiskReport {
    pub assessment: AirQualityAssessment,
    pub profile: HealthProfile,
    pub risk: PersonalRisk,
}

/// Use case for scoring personal exposure risk in a city
pub struct AssessPersonalRiskUseCase {
    assess: AssessCityUseCase,
}

impl AssessPersonalRiskUseCase {
    pub fn new(source: ReadingSource) -> Self {
        Self {
            assess: AssessCityUseCase::new(source),
        }
    }

    pub async fn execute(
        &self,
        city: &City,
        profile: &HealthProfile,
    ) -> Result<PersonalRiskReport, ProviderError> {
        let assessment = self.assess.execute(city).await?;
        let risk = PersonalRisk::assess(assessment.aqi, profile);

        info!(
            "Personal risk in {}: {:.1}/10 ({})",
            city, risk.score, risk.level
        );

        Ok(PersonalRiskReport {
            assessment,
            profile: *profile,
            risk,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::shared::mocks::MockProvider;
    use aqi_domain::PersonalRiskLevel;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_profile_scales_risk() {
        let demo = Arc::new(MockProvider::demo().with_pm25("Kolkata", 45.0));
        let use_case = AssessPersonalRiskUseCase::new(ReadingSource::new(demo));
        let city = City::find("Kolkata").unwrap();

        let adult = use_case
            .execute(&city, &HealthProfile::new(30))
            .await
            .unwrap();
        assert_eq!(adult.assessment.aqi.value(), 75);
        assert!((adult.risk.score - 7.5).abs() < 1e-9);
        assert_eq!(adult.risk.level, PersonalRiskLevel::High);

        let elderly = use_case
            .execute(&city, &HealthProfile::new(70).with_heart_disease(true))
            .await
            .unwrap();
        assert_eq!(elderly.risk.score, 10.0);
        assert_eq!(elderly.risk.level, PersonalRiskLevel::VeryHigh);
        assert_eq!(elderly.profile.age, 70);
    }
}
