//! Synthetic air quality data

mod provider;
mod series;

pub use provider::DemoDataProvider;
pub use series::generate_series;
