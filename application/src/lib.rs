//! Application layer for aqi-dashboard
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DashboardState, FetchParams};
pub use ports::{
    air_quality_provider::{AirQualityProvider, ProviderError},
    progress::{NoProgress, SurveyProgressNotifier},
};
pub use use_cases::analyze_trend::{AnalyzeTrendUseCase, TrendReport};
pub use use_cases::assess_city::AssessCityUseCase;
pub use use_cases::personal_risk::{AssessPersonalRiskUseCase, PersonalRiskReport};
pub use use_cases::shared::ReadingSource;
pub use use_cases::survey_cities::{CitySurvey, SurveyCitiesUseCase, SurveyError};
