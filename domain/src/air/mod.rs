//! Raw air quality readings

mod index_level;
mod reading;

pub use index_level::ProviderIndexLevel;
pub use reading::PollutantReading;
