//! Progress reporting for multi-city surveys

use aqi_application::SurveyProgressNotifier;
use aqi_domain::{City, DataSource};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

const SURVEY_PREFIX: &str = "Surveying cities";

/// Reports survey progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn survey_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn city_status(city: &City, source: DataSource) -> String {
        match source {
            DataSource::Live => format!("{} {}", "v".green(), city),
            DataSource::Demo => format!("{} {} (demo)", "~".yellow(), city),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyProgressNotifier for ProgressReporter {
    fn on_survey_start(&self, total_cities: usize) {
        let pb = ProgressBar::new(total_cities as u64);
        pb.set_style(Self::survey_style());
        pb.set_prefix(SURVEY_PREFIX);
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_city_complete(&self, city: &City, source: DataSource) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(Self::city_status(city, source));
            pb.inc(1);
        }
    }

    fn on_survey_complete(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Writes to stderr so stdout stays clean for piping.
pub struct SimpleProgress;

impl SurveyProgressNotifier for SimpleProgress {
    fn on_survey_start(&self, total_cities: usize) {
        eprintln!(
            "{} {} ({} cities)",
            "->".cyan(),
            SURVEY_PREFIX.bold(),
            total_cities
        );
    }

    fn on_city_complete(&self, city: &City, source: DataSource) {
        eprintln!("  {}", ProgressReporter::city_status(city, source));
    }

    fn on_survey_complete(&self) {
        eprintln!();
    }
}
