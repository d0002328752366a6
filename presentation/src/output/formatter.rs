//! Output formatter trait

use aqi_domain::OutputFormat;
use serde::Serialize;

/// Trait for rendering a dashboard result in each output format
pub trait OutputFormatter<T: Serialize + ?Sized> {
    /// Format the complete dashboard view
    fn format(&self, value: &T) -> String;

    /// Format a concise one-line view
    fn format_summary(&self, value: &T) -> String;

    /// Format as JSON
    fn format_json(&self, value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Dispatch on the selected output format
    fn render(&self, value: &T, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(value),
            OutputFormat::Summary => self.format_summary(value),
            OutputFormat::Json => self.format_json(value),
        }
    }
}
