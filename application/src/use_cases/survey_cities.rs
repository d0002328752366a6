//! Survey cities use case
//!
//! Assesses a list of cities one after another, pausing between requests to
//! stay under the API rate limit, then aggregates the national picture.

use crate::config::FetchParams;
use crate::ports::air_quality_provider::ProviderError;
use crate::ports::progress::{NoProgress, SurveyProgressNotifier};
use crate::use_cases::shared::ReadingSource;
use aqi_domain::{AirQualityAlert, AirQualityAssessment, AlertPolicy, City, DataSource};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a survey
#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("No cities to survey")]
    NoCities,

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Aggregated result of a multi-city survey
#[derive(Debug, Clone, Serialize)]
pub struct CitySurvey {
    /// Assessments in the order the cities were requested
    pub assessments: Vec<AirQualityAssessment>,
    pub alerts: Vec<AirQualityAlert>,
    /// Mean AQI across all surveyed cities
    pub national_average: f64,
    /// City with the highest AQI (first one wins on ties)
    pub worst_city: City,
}

impl CitySurvey {
    fn from_assessments(
        assessments: Vec<AirQualityAssessment>,
        policy: &AlertPolicy,
    ) -> Result<Self, SurveyError> {
        let worst = assessments
            .iter()
            .reduce(|worst, a| if a.aqi > worst.aqi { a } else { worst })
            .ok_or(SurveyError::NoCities)?;
        let worst_city = worst.city;

        let total: u32 = assessments.iter().map(|a| a.aqi.value()).sum();
        let national_average = total as f64 / assessments.len() as f64;
        let alerts = assessments.iter().filter_map(|a| policy.evaluate(a)).collect();

        Ok(Self {
            assessments,
            alerts,
            national_average,
            worst_city,
        })
    }

    /// Assessments sorted by AQI, worst first.
    pub fn ranked(&self) -> Vec<&AirQualityAssessment> {
        let mut ranked: Vec<_> = self.assessments.iter().collect();
        ranked.sort_by(|a, b| b.aqi.cmp(&a.aqi));
        ranked
    }

    /// Number of cities served from synthetic data
    pub fn demo_count(&self) -> usize {
        self.assessments
            .iter()
            .filter(|a| a.source == DataSource::Demo)
            .count()
    }
}

/// Use case for surveying several cities
pub struct SurveyCitiesUseCase {
    source: ReadingSource,
    policy: AlertPolicy,
    rate_limit: Duration,
}

impl SurveyCitiesUseCase {
    pub fn new(source: ReadingSource) -> Self {
        Self {
            source,
            policy: AlertPolicy::default(),
            rate_limit: FetchParams::default().rate_limit,
        }
    }

    pub fn with_policy(mut self, policy: AlertPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: Duration) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, cities: &[City]) -> Result<CitySurvey, SurveyError> {
        self.execute_with_progress(cities, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        cities: &[City],
        progress: &dyn SurveyProgressNotifier,
    ) -> Result<CitySurvey, SurveyError> {
        if cities.is_empty() {
            return Err(SurveyError::NoCities);
        }

        info!("Surveying {} cities", cities.len());
        progress.on_survey_start(cities.len());

        let mut assessments = Vec::with_capacity(cities.len());
        for (i, city) in cities.iter().enumerate() {
            if i > 0 && !self.rate_limit.is_zero() {
                debug!("Waiting {:?} before {}", self.rate_limit, city);
                tokio::time::sleep(self.rate_limit).await;
            }

            let (reading, source) = self.source.current(city).await?;
            let assessment = AirQualityAssessment::from_reading(*city, reading, source);
            debug!("{}: AQI {}", city, assessment.aqi);
            progress.on_city_complete(city, source);
            assessments.push(assessment);
        }

        progress.on_survey_complete();

        let survey = CitySurvey::from_assessments(assessments, &self.policy)?;
        info!(
            "Survey complete: average AQI {:.0}, worst {}, {} alert(s)",
            survey.national_average,
            survey.worst_city,
            survey.alerts.len()
        );
        Ok(survey)
    }
}
