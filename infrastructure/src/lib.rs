//! Infrastructure layer for aqi-dashboard
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cache;
pub mod config;
pub mod demo;
pub mod openweather;

// Re-export commonly used types
pub use cache::{CachedProvider, DEFAULT_CACHE_TTL, default_cache_dir};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAlertsConfig, FileConfig, FileDashboardConfig,
    FileDemoConfig, FileFetchConfig, FileLoggingConfig, FileOpenWeatherConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use demo::DemoDataProvider;
pub use openweather::{OpenWeatherClient, OpenWeatherError};
