//! Dashboard configuration from TOML (`[dashboard]` section)

use aqi_application::DashboardState;
use aqi_domain::{City, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDashboardConfig {
    /// City shown when none is given on the command line
    pub default_city: String,
    /// Cities surveyed by `survey --favorites`
    pub favorites: Vec<String>,
}

impl Default for FileDashboardConfig {
    fn default() -> Self {
        let state = DashboardState::default();
        Self {
            default_city: state.selected_city.name.to_string(),
            favorites: state.favorites.iter().map(|c| c.name.to_string()).collect(),
        }
    }
}

impl FileDashboardConfig {
    /// Build the dashboard state, skipping names that are not in the catalog.
    pub fn to_state(&self) -> (DashboardState, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let selected = match City::find(&self.default_city) {
            Some(city) => city,
            None => {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownDefaultCity,
                    format!(
                        "dashboard.default_city: unknown city '{}', using {}",
                        self.default_city,
                        City::default_city()
                    ),
                ));
                City::default_city()
            }
        };

        let mut favorites = Vec::with_capacity(self.favorites.len());
        for name in &self.favorites {
            match City::find(name) {
                Some(city) => favorites.push(city),
                None => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownFavorite,
                    format!("dashboard.favorites: unknown city '{}', ignored", name),
                )),
            }
        }

        (DashboardState::new(selected, favorites), issues)
    }
}
