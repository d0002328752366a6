//! Configuration file loading for aqi-dashboard
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AQI_*` environment variables (sections split on `__`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./aqi.toml` or `./.aqi.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/aqi-dashboard/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, DEFAULT_DEMO_SEED, FileAlertsConfig, FileConfig,
    FileDashboardConfig, FileDemoConfig, FileFetchConfig, FileLoggingConfig,
    FileOpenWeatherConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
