//! Assess city use case
//!
//! Fetches the latest reading for one city and runs it through the domain
//! pipeline (AQI, risk category, recommendations).

use crate::ports::air_quality_provider::ProviderError;
use crate::use_cases::shared::ReadingSource;
use aqi_domain::{AirQualityAssessment, City};
use tracing::info;

/// Use case for assessing a single city
pub struct AssessCityUseCase {
    source: ReadingSource,
}

impl AssessCityUseCase {
    pub fn new(source: ReadingSource) -> Self {
        Self { source }
    }

    pub async fn execute(&self, city: &City) -> Result<AirQualityAssessment, ProviderError> {
        let (reading, source) = self.source.current(city).await?;
        let assessment = AirQualityAssessment::from_reading(*city, reading, source);

        info!(
            "{}: AQI {} ({}, {} data)",
            city,
            assessment.aqi,
            assessment.category_label(),
            source
        );

        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::shared::mocks::MockProvider;
    use aqi_domain::{DataSource, RiskCategory};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_assess_live_city() {
        let live = Arc::new(MockProvider::live().with_pm25("Mumbai", 48.0));
        let source = ReadingSource::new(Arc::new(MockProvider::demo())).with_primary(live);
        let use_case = AssessCityUseCase::new(source);

        let city = City::find("Mumbai").unwrap();
        let assessment = use_case.execute(&city).await.unwrap();

        assert_eq!(assessment.city, city);
        assert_eq!(assessment.aqi.value(), 80);
        assert_eq!(assessment.risk.category, RiskCategory::Moderate);
        assert_eq!(assessment.source, DataSource::Live);
    }

    #[tokio::test]
    async fn test_assess_degrades_to_demo() {
        let live = Arc::new(MockProvider::live().failing(ProviderError::MissingApiKey));
        let demo = Arc::new(MockProvider::demo().with_pm25("Jaipur", 95.0));
        let use_case = AssessCityUseCase::new(ReadingSource::new(demo).with_primary(live));

        let assessment = use_case
            .execute(&City::find("Jaipur").unwrap())
            .await
            .unwrap();

        assert_eq!(assessment.source, DataSource::Demo);
        assert_eq!(assessment.risk.category, RiskCategory::VeryUnhealthy);
    }
}
