//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_trend;
pub mod assess_city;
pub mod personal_risk;
pub mod shared;
pub mod survey_cities;
