//! Console output formatter for dashboard results

use crate::output::formatter::OutputFormatter;
use crate::output::views::{CityCatalog, Conversion};
use aqi_application::{CitySurvey, PersonalRiskReport, TrendReport};
use aqi_domain::{AirQualityAssessment, DataSource, HealthProfile, Recommendation};
use colored::{ColoredString, Colorize};

/// Formats dashboard results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    // ==================== City Assessment ====================

    /// Format the full single-city dashboard
    pub fn format_assessment(assessment: &AirQualityAssessment) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Air Quality: {}", assessment.city)));
        output.push('\n');

        output.push_str(&format!(
            "\n{} {}  {}\n",
            "AQI:".cyan().bold(),
            Self::paint(&assessment.aqi.to_string(), assessment.risk.color).bold(),
            Self::paint(assessment.category_label(), assessment.risk.color)
        ));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Severity:".cyan().bold(),
            assessment.tier(),
            assessment.tier().css_class()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Updated:".cyan().bold(),
            assessment.reading.timestamp.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Source:".cyan().bold(),
            Self::source_label(assessment.source)
        ));
        if let Some(level) = assessment.reading.provider_level {
            output.push_str(&format!("{} {}\n", "Provider index:".cyan().bold(), level));
        }

        output.push_str(&Self::section_header("Pollutants (µg/m³)"));
        for (label, value) in assessment.reading.components() {
            output.push_str(&format!("  {:<8}{:>9.2}\n", label, value));
        }

        output.push_str(&Self::section_header("Health Advisory"));
        output.push_str(&Self::advisory(assessment.recommendation));

        output.push_str(&Self::footer());
        output
    }

    /// Format a single-city result on one line
    pub fn format_assessment_summary(assessment: &AirQualityAssessment) -> String {
        format!(
            "{}: AQI {} ({}){}\n",
            assessment.city.to_string().bold(),
            Self::paint(&assessment.aqi.to_string(), assessment.risk.color),
            assessment.category_label(),
            Self::demo_marker(assessment.source)
        )
    }

    // ==================== Survey ====================

    /// Format the multi-city ranking
    pub fn format_survey(survey: &CitySurvey) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Air Quality Survey"));
        output.push('\n');

        output.push_str(&format!(
            "\n{} {}\n",
            "Cities:".cyan().bold(),
            survey.assessments.len()
        ));
        output.push_str(&format!(
            "{} {:.1}\n",
            "Average AQI:".cyan().bold(),
            survey.national_average
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Worst city:".cyan().bold(),
            survey.worst_city
        ));

        output.push_str(&Self::section_header("Ranking (worst first)"));
        for (rank, assessment) in survey.ranked().into_iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {:<12}{:>5}  {}{}\n",
                rank + 1,
                assessment.city.name,
                Self::paint(&assessment.aqi.to_string(), assessment.risk.color),
                assessment.category_label(),
                Self::demo_marker(assessment.source)
            ));
        }

        if !survey.alerts.is_empty() {
            output.push_str(&Self::section_header("Alerts"));
            for alert in &survey.alerts {
                output.push_str(&format!("  {} {}\n", "!".red().bold(), alert.message));
            }
        }

        let demo = survey.demo_count();
        if demo > 0 {
            output.push_str(&format!(
                "\n{}\n",
                format!("{} of {} readings are demo data.", demo, survey.assessments.len())
                    .dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the survey headline on one line
    pub fn format_survey_summary(survey: &CitySurvey) -> String {
        let worst = survey
            .assessments
            .iter()
            .find(|a| a.city == survey.worst_city)
            .map(|a| a.aqi.value())
            .unwrap_or_default();
        format!(
            "{} cities, average AQI {:.1}, worst {} (AQI {}), {} alert(s)\n",
            survey.assessments.len(),
            survey.national_average,
            survey.worst_city.to_string().bold(),
            worst,
            survey.alerts.len()
        )
    }

    // ==================== Trend ====================

    /// Format history statistics and the forecast table
    pub fn format_trend(report: &TrendReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("AQI Trend: {}", report.city)));
        output.push('\n');

        output.push_str(&format!(
            "\n{} {}\n",
            "Samples:".cyan().bold(),
            report.samples.len()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Source:".cyan().bold(),
            Self::source_label(report.source)
        ));
        if let Some(latest) = report.latest() {
            let risk = latest.aqi.risk();
            output.push_str(&format!(
                "{} AQI {} ({}) at {}\n",
                "Latest:".cyan().bold(),
                Self::paint(&latest.aqi.to_string(), risk.color),
                risk.label(),
                latest.timestamp.format("%Y-%m-%d")
            ));
        }

        match &report.summary {
            Some(summary) => {
                output.push_str(&Self::section_header(&format!(
                    "Last {} readings",
                    summary.window
                )));
                output.push_str(&format!("  Average   {:.1}\n", summary.average));
                output.push_str(&format!("  Max       {}\n", summary.max));
                output.push_str(&format!("  Min       {}\n", summary.min));
                output.push_str(&format!(
                    "  Good      {} of {}\n",
                    summary.good_count, summary.window
                ));
            }
            None => output.push_str(&format!("\n{}\n", "No history available.".dimmed())),
        }

        match &report.forecast {
            Some(forecast) => {
                output.push_str(&Self::section_header(&format!(
                    "{}-day forecast",
                    forecast.points.len()
                )));
                output.push_str(&format!(
                    "  {}\n",
                    format!(
                        "Baseline {:.1} ± {:.1}",
                        forecast.baseline_mean, forecast.baseline_std
                    )
                    .dimmed()
                ));
                for point in &forecast.points {
                    output.push_str(&format!(
                        "  {}  {:>6.1}  ({:.1} - {:.1})\n",
                        point.date.format("%Y-%m-%d"),
                        point.predicted,
                        point.lower,
                        point.upper
                    ));
                }
            }
            None => output.push_str(&format!(
                "\n{}\n",
                "Not enough history for a forecast.".dimmed()
            )),
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the trend headline on one line
    pub fn format_trend_summary(report: &TrendReport) -> String {
        match &report.summary {
            Some(summary) => format!(
                "{}: {}-reading average AQI {:.1} (max {}, min {}, {} good)\n",
                report.city.to_string().bold(),
                summary.window,
                summary.average,
                summary.max,
                summary.min,
                summary.good_count
            ),
            None => format!("{}: no history available\n", report.city.to_string().bold()),
        }
    }

    // ==================== Personal Risk ====================

    /// Format the personal health risk view
    pub fn format_personal_risk(report: &PersonalRiskReport) -> String {
        let mut output = String::new();
        let level = report.risk.level;

        output.push_str(&Self::header(&format!(
            "Personal Health Risk: {}",
            report.assessment.city
        )));
        output.push('\n');

        output.push_str(&format!(
            "\n{} {}\n",
            "Profile:".cyan().bold(),
            Self::profile_label(&report.profile)
        ));
        output.push_str(&format!(
            "{} {} ({})\n",
            "City AQI:".cyan().bold(),
            Self::paint(&report.assessment.aqi.to_string(), report.assessment.risk.color),
            report.assessment.category_label()
        ));
        output.push_str(&format!(
            "{} {:.1} / 10  {} {}\n",
            "Risk score:".cyan().bold(),
            report.risk.score,
            level.icon(),
            Self::paint(level.label(), level.color()).bold()
        ));

        output.push_str(&Self::section_header("Recommended Actions"));
        for (i, action) in level.actions().iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, action));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the personal risk on one line
    pub fn format_personal_risk_summary(report: &PersonalRiskReport) -> String {
        format!(
            "{}: AQI {}, personal risk {:.1} ({})\n",
            report.assessment.city.to_string().bold(),
            report.assessment.aqi,
            report.risk.score,
            report.risk.level
        )
    }

    // ==================== Conversion ====================

    /// Format a PM2.5 conversion with its classification
    pub fn format_conversion(conversion: &Conversion) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("PM2.5 to AQI"));
        output.push('\n');

        output.push_str(&format!(
            "\n{} {:.1} µg/m³\n",
            "PM2.5:".cyan().bold(),
            conversion.pm2_5
        ));
        output.push_str(&format!(
            "{} {}\n",
            "AQI:".cyan().bold(),
            Self::paint(&conversion.aqi.to_string(), conversion.risk.color).bold()
        ));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Category:".cyan().bold(),
            Self::paint(conversion.risk.label(), conversion.risk.color),
            conversion.risk.color
        ));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Severity:".cyan().bold(),
            conversion.risk.tier,
            conversion.risk.tier.css_class()
        ));

        output.push_str(&Self::section_header("Health Advisory"));
        output.push_str(&Self::advisory(conversion.recommendation));

        output.push_str(&Self::footer());
        output
    }

    /// Format a conversion on one line
    pub fn format_conversion_summary(conversion: &Conversion) -> String {
        format!(
            "PM2.5 {:.1} µg/m³ = AQI {} ({})\n",
            conversion.pm2_5,
            Self::paint(&conversion.aqi.to_string(), conversion.risk.color),
            conversion.risk.label()
        )
    }

    // ==================== City Catalog ====================

    /// Format the supported city list
    pub fn format_cities(catalog: &CityCatalog) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Supported Cities"));
        output.push('\n');
        output.push('\n');

        for city in &catalog.cities {
            let marker = match (city.selected, city.favorite) {
                (true, _) => ">".green().bold(),
                (false, true) => "*".yellow(),
                (false, false) => " ".normal(),
            };
            output.push_str(&format!(
                "{} {:<12}{:>9.4}, {:>9.4}\n",
                marker, city.name, city.lat, city.lon
            ));
        }

        output.push_str(&format!(
            "\n{}\n",
            "> default city   * favourite".dimmed()
        ));
        output.push_str(&Self::footer());
        output
    }

    /// Format the city names on one line
    pub fn format_cities_summary(catalog: &CityCatalog) -> String {
        let names: Vec<&str> = catalog.cities.iter().map(|c| c.name).collect();
        format!("{}\n", names.join(", "))
    }

    // ==================== Helpers ====================

    fn advisory(recommendation: &Recommendation) -> String {
        let mut output = format!("\n{} {}\n\n", recommendation.icon, recommendation.message);
        let actions: Vec<String> = recommendation
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| format!("{}. {}", i + 1, action))
            .collect();
        output.push_str(&Self::indent(&actions.join("\n"), "  "));
        output.push('\n');
        output
    }

    fn profile_label(profile: &HealthProfile) -> String {
        let mut parts = vec![format!("age {}", profile.age)];
        if profile.respiratory_condition {
            parts.push("respiratory condition".to_string());
        }
        if profile.heart_disease {
            parts.push("heart disease".to_string());
        }
        if profile.pregnant {
            parts.push("pregnant".to_string());
        }
        parts.join(", ")
    }

    fn source_label(source: DataSource) -> ColoredString {
        match source {
            DataSource::Live => "live".green(),
            DataSource::Demo => "demo data".yellow(),
        }
    }

    fn demo_marker(source: DataSource) -> ColoredString {
        if source.is_demo() {
            " [demo]".dimmed()
        } else {
            "".normal()
        }
    }

    /// Color text with a `#rrggbb` token; unparseable tokens leave it plain.
    fn paint(text: &str, hex: &str) -> ColoredString {
        match Self::parse_hex(hex) {
            Some((r, g, b)) => text.truecolor(r, g, b),
            None => text.normal(),
        }
    }

    fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| -> Option<u8> { u8::from_str_radix(hex.get(i..i + 2)?, 16).ok() };
        Some((channel(0)?, channel(2)?, channel(4)?))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter<AirQualityAssessment> for ConsoleFormatter {
    fn format(&self, value: &AirQualityAssessment) -> String {
        Self::format_assessment(value)
    }

    fn format_summary(&self, value: &AirQualityAssessment) -> String {
        Self::format_assessment_summary(value)
    }
}

impl OutputFormatter<CitySurvey> for ConsoleFormatter {
    fn format(&self, value: &CitySurvey) -> String {
        Self::format_survey(value)
    }

    fn format_summary(&self, value: &CitySurvey) -> String {
        Self::format_survey_summary(value)
    }
}

impl OutputFormatter<TrendReport> for ConsoleFormatter {
    fn format(&self, value: &TrendReport) -> String {
        Self::format_trend(value)
    }

    fn format_summary(&self, value: &TrendReport) -> String {
        Self::format_trend_summary(value)
    }
}

impl OutputFormatter<PersonalRiskReport> for ConsoleFormatter {
    fn format(&self, value: &PersonalRiskReport) -> String {
        Self::format_personal_risk(value)
    }

    fn format_summary(&self, value: &PersonalRiskReport) -> String {
        Self::format_personal_risk_summary(value)
    }
}

impl OutputFormatter<Conversion> for ConsoleFormatter {
    fn format(&self, value: &Conversion) -> String {
        Self::format_conversion(value)
    }

    fn format_summary(&self, value: &Conversion) -> String {
        Self::format_conversion_summary(value)
    }
}

impl OutputFormatter<CityCatalog> for ConsoleFormatter {
    fn format(&self, value: &CityCatalog) -> String {
        Self::format_cities(value)
    }

    fn format_summary(&self, value: &CityCatalog) -> String {
        Self::format_cities_summary(value)
    }
}
