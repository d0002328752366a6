//! Alert configuration from TOML (`[alerts]` section)

use aqi_domain::{AlertPolicy, ConfigIssue, ConfigIssueCode, SeverityTier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAlertsConfig {
    /// Lowest severity tier that raises an alert (low, medium, high, very-high)
    pub min_tier: String,
}

impl Default for FileAlertsConfig {
    fn default() -> Self {
        Self {
            min_tier: SeverityTier::High.as_str().to_string(),
        }
    }
}

impl FileAlertsConfig {
    /// Parse the threshold, falling back to the default policy on bad input.
    pub fn parse_policy(&self) -> (AlertPolicy, Option<ConfigIssue>) {
        match self.min_tier.parse::<SeverityTier>() {
            Ok(tier) => (AlertPolicy::new(tier), None),
            Err(_) => (
                AlertPolicy::default(),
                Some(ConfigIssue::warning(
                    ConfigIssueCode::UnknownAlertTier,
                    format!(
                        "alerts.min_tier: unknown value '{}', falling back to '{}'",
                        self.min_tier,
                        AlertPolicy::default().min_tier
                    ),
                )),
            ),
        }
    }
}
