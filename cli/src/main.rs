//! CLI entrypoint for AQI Dashboard
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use aqi_application::{
    AirQualityProvider, AnalyzeTrendUseCase, AssessCityUseCase, AssessPersonalRiskUseCase,
    DashboardState, NoProgress, ReadingSource, SurveyCitiesUseCase, SurveyProgressNotifier,
};
use aqi_domain::{City, HealthProfile};
use aqi_infrastructure::{
    CachedProvider, ConfigLoader, DemoDataProvider, FileConfig, OpenWeatherClient,
    OpenWeatherError,
};
use aqi_presentation::{
    CityCatalog, Cli, Command, ConsoleFormatter, Conversion, OutputFormatter, ProgressReporter,
    SimpleProgress, set_color_enabled,
};
use clap::Parser;
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    let log_file = cli.log_file.clone().or_else(|| config.logging.file.clone());
    let _log_guard = init_logging(cli.verbose, log_file.as_deref())?;

    info!("Starting AQI Dashboard");

    for issue in config.ensure_valid()? {
        warn!("{}", issue.message);
    }

    set_color_enabled(config.output.color && !cli.no_color);
    let format = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // Unknown names were already reported by validation
    let (state, _) = config.dashboard.to_state();
    let (policy, _) = config.alerts.parse_policy();
    let params = config.fetch.to_fetch_params();

    let output = match cli.command_or_default() {
        Command::Convert { pm25 } => ConsoleFormatter.render(&Conversion::of(pm25), format),
        Command::Cities => ConsoleFormatter.render(&CityCatalog::from_state(&state), format),
        Command::City { name } => {
            let city = resolve_city(name.as_deref(), &state)?;
            let use_case = AssessCityUseCase::new(reading_source(&cli, &config));
            let assessment = use_case.execute(&city).await?;
            ConsoleFormatter.render(&assessment, format)
        }
        Command::Survey { favorites } => {
            let cities = if favorites {
                state.favorites.clone()
            } else {
                City::all().to_vec()
            };

            let progress: Box<dyn SurveyProgressNotifier> =
                if cli.quiet || format == aqi_domain::OutputFormat::Json {
                    Box::new(NoProgress)
                } else if std::io::stderr().is_terminal() {
                    Box::new(ProgressReporter::new())
                } else {
                    Box::new(SimpleProgress)
                };

            let use_case = SurveyCitiesUseCase::new(reading_source(&cli, &config))
                .with_policy(policy)
                .with_rate_limit(params.rate_limit);
            let survey = use_case
                .execute_with_progress(&cities, progress.as_ref())
                .await?;
            ConsoleFormatter.render(&survey, format)
        }
        Command::Trend { name, days } => {
            let city = resolve_city(name.as_deref(), &state)?;
            let params = match days {
                Some(days) => params.with_history_points(days),
                None => params,
            };
            let use_case = AnalyzeTrendUseCase::new(reading_source(&cli, &config));
            let report = use_case.execute(&city, &params).await?;
            ConsoleFormatter.render(&report, format)
        }
        Command::Health {
            name,
            age,
            respiratory,
            heart_disease,
            pregnant,
        } => {
            let city = resolve_city(name.as_deref(), &state)?;
            let profile = HealthProfile::new(age)
                .with_respiratory_condition(respiratory)
                .with_heart_disease(heart_disease)
                .with_pregnant(pregnant);
            let use_case = AssessPersonalRiskUseCase::new(reading_source(&cli, &config));
            let report = use_case.execute(&city, &profile).await?;
            ConsoleFormatter.render(&report, format)
        }
    };

    println!("{}", output);

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// The returned guard flushes the log file on drop and must outlive `main`'s work.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn resolve_city(name: Option<&str>, state: &DashboardState) -> Result<City> {
    match name {
        Some(name) => Ok(name.parse::<City>()?),
        None => Ok(state.selected_city),
    }
}

/// Live provider (cached) with demo fallback, or demo only.
fn reading_source(cli: &Cli, config: &FileConfig) -> ReadingSource {
    let demo: Arc<dyn AirQualityProvider> = Arc::new(DemoDataProvider::new(config.demo.seed));
    let source = ReadingSource::new(demo);

    if cli.demo || config.demo.force {
        info!("Demo mode forced; live API disabled");
        return source;
    }

    match OpenWeatherClient::from_config(&config.openweather) {
        Ok(client) => {
            let mut cached = CachedProvider::new(client, config.fetch.cache_ttl());
            if let Some(dir) = config.fetch.resolve_cache_dir() {
                cached = cached.with_cache_dir(dir);
            }
            source.with_primary(Arc::new(cached))
        }
        Err(OpenWeatherError::MissingApiKey(var)) => {
            warn!("{} is not set; showing demo data", var);
            source
        }
        Err(e) => {
            warn!("OpenWeatherMap client unavailable ({}); showing demo data", e);
            source
        }
    }
}
