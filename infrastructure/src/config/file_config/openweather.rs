//! OpenWeatherMap configuration from TOML (`[openweather]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";

/// OpenWeatherMap API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenWeatherConfig {
    /// Environment variable name for the API key (default: "OPENWEATHER_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use env var instead).
    pub api_key: Option<String>,
    /// Base URL for the air pollution API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileOpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENWEATHER_API_KEY".to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl FileOpenWeatherConfig {
    /// Resolve the API key: the environment variable wins over the file.
    ///
    /// Blank values count as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        let from_env = std::env::var(&self.api_key_env).ok();
        Self::pick_key(from_env, self.api_key.clone())
    }

    fn pick_key(from_env: Option<String>, from_file: Option<String>) -> Option<String> {
        [from_env, from_file]
            .into_iter()
            .flatten()
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileOpenWeatherConfig::default();
        assert_eq!(config.api_key_env, "OPENWEATHER_API_KEY");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_env_key_preferred() {
        let key = FileOpenWeatherConfig::pick_key(
            Some("from-env".to_string()),
            Some("from-file".to_string()),
        );
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_blank_keys_ignored() {
        let key = FileOpenWeatherConfig::pick_key(Some("  ".to_string()), Some("file".to_string()));
        assert_eq!(key.as_deref(), Some("file"));
        assert!(FileOpenWeatherConfig::pick_key(Some(String::new()), None).is_none());
    }

    #[test]
    fn test_unset_env_var_uses_file_key() {
        let config = FileOpenWeatherConfig {
            api_key_env: "AQI_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            api_key: Some("abc123".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("abc123"));
    }
}
