//! Domain layer for aqi-dashboard
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Pipeline
//!
//! ```text
//! PM2.5 concentration → AqiValue → RiskCategory → Recommendation
//! ```
//!
//! - [`compute_aqi`]: piecewise-linear conversion onto the 0–500 scale
//! - [`classify_risk`]: six categories with colour and severity tier
//! - [`recommendations_for_label`]: advice bundle, "Good" for unknown labels
//!
//! Around the pipeline sit the city catalog, assessments, trend statistics,
//! alerts and the personal health risk score.

pub mod air;
pub mod alert;
pub mod aqi;
pub mod assessment;
pub mod city;
pub mod config;
pub mod core;
pub mod health;
pub mod recommendation;
pub mod risk;
pub mod trend;

// Re-export commonly used types
pub use air::{PollutantReading, ProviderIndexLevel};
pub use alert::{AirQualityAlert, AlertPolicy};
pub use aqi::{AqiValue, compute_aqi};
pub use assessment::{AirQualityAssessment, DataSource};
pub use city::City;
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use health::{HealthProfile, PersonalRisk, PersonalRiskLevel};
pub use recommendation::{Recommendation, recommendations_for, recommendations_for_label};
pub use risk::{RiskAssessment, RiskCategory, SeverityTier, classify_risk};
pub use trend::{AqiSample, Forecast, ForecastPoint, TrendSummary};
