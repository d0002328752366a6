//! OpenWeatherMap adapter
//!
//! Live air pollution readings over HTTP (`reqwest`), converted into domain
//! [`PollutantReading`](aqi_domain::PollutantReading)s.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::OpenWeatherClient;
pub use error::OpenWeatherError;
