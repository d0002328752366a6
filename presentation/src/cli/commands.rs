//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for dashboard results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full dashboard with pollutants and advice
    Full,
    /// One line per result
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for aqi_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => aqi_domain::OutputFormat::Full,
            OutputFormat::Summary => aqi_domain::OutputFormat::Summary,
            OutputFormat::Json => aqi_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for aqi-dashboard
#[derive(Parser, Debug)]
#[command(name = "aqi-dashboard")]
#[command(author, version, about = "Air quality dashboard for Indian cities")]
#[command(long_about = r#"
AQI Dashboard shows air quality for major Indian cities.

PM2.5 readings are converted to the national 0-500 AQI scale, classified
into six health categories and paired with recommended actions. Live data
comes from OpenWeatherMap when OPENWEATHER_API_KEY is set; otherwise (or on
any API failure) a deterministic demo dataset is used.

Configuration files are loaded from (in priority order):
1. AQI_* environment variables
2. --config <path>     Explicit config file
3. ./aqi.toml          Project-level config
4. ~/.config/aqi-dashboard/config.toml   Global config

Example:
  aqi-dashboard city Mumbai
  aqi-dashboard survey --favorites
  aqi-dashboard trend Delhi --days 30
  aqi-dashboard health Delhi --age 70 --respiratory
  aqi-dashboard convert 75
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the configured format, then "full")
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Use demo data only; never call the live API
    #[arg(long, global = true)]
    pub demo: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The subcommand to run; a bare invocation shows the default city.
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::City { name: None })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Current air quality for one city
    City {
        /// City name (defaults to the configured default city)
        name: Option<String>,
    },

    /// Survey every city, worst first
    Survey {
        /// Only survey the configured favourite cities
        #[arg(long)]
        favorites: bool,
    },

    /// History summary and forecast for one city
    Trend {
        /// City name (defaults to the configured default city)
        name: Option<String>,

        /// Days of history to analyse
        #[arg(long, value_name = "N")]
        days: Option<usize>,
    },

    /// Personal health risk for one city
    Health {
        /// City name (defaults to the configured default city)
        name: Option<String>,

        /// Your age in years
        #[arg(long)]
        age: u32,

        /// You have asthma or another respiratory condition
        #[arg(long)]
        respiratory: bool,

        /// You have heart disease
        #[arg(long)]
        heart_disease: bool,

        /// You are pregnant
        #[arg(long)]
        pregnant: bool,
    },

    /// Convert a PM2.5 concentration (µg/m³) to AQI
    Convert {
        /// PM2.5 concentration in µg/m³
        #[arg(allow_negative_numbers = true)]
        pm25: f64,
    },

    /// List the supported cities
    Cities,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        <Cli as CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_defaults_to_city() {
        let cli = Cli::parse_from(["aqi-dashboard"]);
        assert_eq!(cli.command_or_default(), Command::City { name: None });
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["aqi-dashboard", "city", "Pune", "-o", "json", "-vv", "--demo"]);
        assert_eq!(
            cli.command_or_default(),
            Command::City {
                name: Some("Pune".to_string())
            }
        );
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(cli.demo);
    }

    #[test]
    fn test_health_flags() {
        let cli = Cli::parse_from([
            "aqi-dashboard",
            "health",
            "Delhi",
            "--age",
            "70",
            "--respiratory",
            "--heart-disease",
        ]);
        assert_eq!(
            cli.command_or_default(),
            Command::Health {
                name: Some("Delhi".to_string()),
                age: 70,
                respiratory: true,
                heart_disease: true,
                pregnant: false,
            }
        );
    }

    #[test]
    fn test_health_requires_age() {
        assert!(Cli::try_parse_from(["aqi-dashboard", "health", "Delhi"]).is_err());
    }

    #[test]
    fn test_convert_accepts_negative() {
        let cli = Cli::parse_from(["aqi-dashboard", "convert", "-5"]);
        assert_eq!(cli.command_or_default(), Command::Convert { pm25: -5.0 });
    }

    #[test]
    fn test_convert_accepts_infinity() {
        let cli = Cli::parse_from(["aqi-dashboard", "convert", "inf"]);
        assert_eq!(cli.command_or_default(), Command::Convert { pm25: f64::INFINITY });
    }

    #[test]
    fn test_trend_days() {
        let cli = Cli::parse_from(["aqi-dashboard", "trend", "--days", "30"]);
        assert_eq!(
            cli.command_or_default(),
            Command::Trend {
                name: None,
                days: Some(30)
            }
        );
    }

    #[test]
    fn test_output_format_into_domain() {
        assert_eq!(
            aqi_domain::OutputFormat::from(OutputFormat::Summary),
            aqi_domain::OutputFormat::Summary
        );
    }
}
