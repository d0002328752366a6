//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`FetchParams`] — rate limiting and history/forecast sizes
//! - [`DashboardState`] — selected city, favourites, comparison toggle

pub mod dashboard_state;
pub mod fetch_params;

pub use dashboard_state::DashboardState;
pub use fetch_params::FetchParams;
