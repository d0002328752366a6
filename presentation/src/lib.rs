//! Presentation layer for aqi-dashboard
//!
//! This crate contains CLI definitions, output formatters,
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::set_color_enabled;
pub use output::views::{CityCatalog, CityListing, Conversion};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
