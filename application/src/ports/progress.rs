//! Progress notification port
//!
//! Defines the interface for reporting progress during a multi-city survey.

use aqi_domain::{City, DataSource};

/// Callback for progress updates during a survey
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, etc.)
pub trait SurveyProgressNotifier: Send + Sync {
    /// Called once before the first city is fetched
    fn on_survey_start(&self, total_cities: usize);

    /// Called when a city's reading has been assessed
    fn on_city_complete(&self, city: &City, source: DataSource);

    /// Called after the last city
    fn on_survey_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SurveyProgressNotifier for NoProgress {
    fn on_survey_start(&self, _total_cities: usize) {}
    fn on_city_complete(&self, _city: &City, _source: DataSource) {}
    fn on_survey_complete(&self) {}
}
