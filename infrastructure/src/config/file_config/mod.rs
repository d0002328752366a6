//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod alerts;
mod dashboard;
mod demo;
mod fetch;
mod logging;
mod openweather;
mod output;

pub use alerts::FileAlertsConfig;
pub use dashboard::FileDashboardConfig;
pub use demo::{DEFAULT_DEMO_SEED, FileDemoConfig};
pub use fetch::FileFetchConfig;
pub use logging::FileLoggingConfig;
pub use openweather::{DEFAULT_BASE_URL, FileOpenWeatherConfig};
pub use output::{FileOutputConfig, FileOutputFormat};

use aqi_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// OpenWeatherMap API settings
    pub openweather: FileOpenWeatherConfig,
    /// Caching, rate limiting and history sizes
    pub fetch: FileFetchConfig,
    /// Synthetic data settings
    pub demo: FileDemoConfig,
    /// Alert threshold
    pub alerts: FileAlertsConfig,
    /// Default city and favourites
    pub dashboard: FileDashboardConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Zero-valued limits that make fetching impossible
    /// 2. City names missing from the catalog
    /// 3. Enum parse failures (alert tier)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Limits
        if self.openweather.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "openweather.timeout_seconds cannot be 0",
            ));
        }
        if self.fetch.history_points == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroHistoryPoints,
                "fetch.history_points cannot be 0",
            ));
        }

        // 2. Cities
        issues.extend(self.dashboard.to_state().1);

        // 3. Enum parse validation
        issues.extend(self.alerts.parse_policy().1);

        issues
    }

    /// Fail on error-severity issues, returning the warnings otherwise.
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(|i| i.is_error());
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(
                errors.into_iter().map(|i| i.message).collect(),
            ))
        }
    }
}
