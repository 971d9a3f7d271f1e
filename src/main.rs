use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use sinchai_advisor::{i18n, render, Advice, AppState, LocationLabel};
use sinchai_core::{AppError, Config, ConfigError, Language};
use sinchai_weather::{simulated_forecast, District, LocationSource, WeatherProvider};

#[derive(Parser, Debug)]
#[command(name = "sinchai")]
#[command(about = "Irrigation advice for Punjab districts from the short-range forecast")]
#[command(version)]
struct CliArgs {
    /// District code, e.g. ludhiana (see --list-districts)
    #[arg(short, long, conflicts_with_all = ["lat", "gps", "simulate"])]
    district: Option<String>,

    /// Latitude of the field, used together with --lon
    #[arg(long, requires = "lon", allow_negative_numbers = true, conflicts_with_all = ["gps", "simulate"])]
    lat: Option<f64>,

    /// Longitude of the field, used together with --lat
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Ask the system location service for the current position
    #[arg(long, conflicts_with = "simulate")]
    gps: bool,

    /// Use built-in test data instead of calling the forecast API
    #[arg(long)]
    simulate: bool,

    /// Report language: en or pa (defaults to the config file setting)
    #[arg(short, long)]
    lang: Option<Language>,

    /// Print the report in both languages
    #[arg(long)]
    both: bool,

    /// Print the advice as JSON instead of text
    #[arg(long, conflicts_with = "both")]
    json: bool,

    /// Config file (default: <config dir>/sinchai/config.toml)
    #[arg(short, long, env = "SINCHAI_CONFIG")]
    config: Option<PathBuf>,

    /// List the known districts and exit
    #[arg(long)]
    list_districts: bool,
}

impl CliArgs {
    fn location_source(&self) -> Option<LocationSource> {
        if let Some(code) = &self.district {
            return Some(LocationSource::District(code.clone()));
        }
        if let (Some(latitude), Some(longitude)) = (self.lat, self.lon) {
            return Some(LocationSource::Coordinates {
                latitude,
                longitude,
            });
        }
        if self.gps {
            return Some(LocationSource::System);
        }
        None
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = sinchai_core::init() {
        eprintln!("{:#}", e);
    }

    if args.list_districts {
        for d in District::all() {
            println!("{:<12} {:<12} {:.4}, {:.4}", d.code, d.name, d.latitude, d.longitude);
        }
        return ExitCode::SUCCESS;
    }

    let config = match Config::load_validated(args.config.as_deref()) {
        Ok((config, _)) => config,
        Err(e) => {
            tracing::error!("{:#}", e);
            let err = AppError::Config(ConfigError::Invalid(format!("{:#}", e)));
            eprintln!("{}", i18n::error_text(args.lang.unwrap_or_default(), &err));
            return ExitCode::FAILURE;
        }
    };

    let language = args.lang.unwrap_or(config.ui.language);
    let mut state = AppState::new(language, config.thresholds);

    match run(&args, &config, &mut state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", i18n::error_text(state.language(), &e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &CliArgs, config: &Config, state: &mut AppState) -> Result<(), AppError> {
    let forecast = if args.simulate {
        let forecast = simulated_forecast(Utc::now())?;
        let name = forecast.location.name.clone().unwrap_or_default();
        state.set_location(LocationLabel::Simulated { name });
        forecast
    } else {
        let Some(source) = args.location_source() else {
            let prompt = i18n::labels(state.language()).select_prompt;
            println!("{} (--district, --lat/--lon, --gps or --simulate)", prompt);
            return Ok(());
        };

        let location = source.resolve().await?;
        state.set_location(LocationLabel::for_location(&location));

        let provider = WeatherProvider::new(&config.api)?;
        provider.fetch(&location).await?
    };

    let advice = state.record_forecast(forecast);
    print_advice(args, &advice)?;

    if args.both {
        if let Some(advice) = state.toggle_language(None) {
            println!();
            print_advice(args, &advice)?;
        }
    }

    Ok(())
}

fn print_advice(args: &CliArgs, advice: &Advice) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let json = serde_json::to_string_pretty(advice).context("Failed to serialize advice")?;
        writeln!(out, "{}", json)?;
    } else {
        render::report(&mut out, advice)?;
    }

    Ok(())
}
