use std::path::PathBuf;
use std::process::ExitCode;

use airwatch::{
    AirwatchConfig, AirwatchError, Coordinate, OpenWeatherClient, ReportBuilder, telemetry, web,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

/// Air quality and weather for any coordinate
#[derive(Debug, Parser)]
#[command(name = "airwatch", version, about, arg_required_else_help = true)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the environmental report for a coordinate
    Report {
        /// Latitude in degrees, -90 to 90
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude in degrees, -180 to 180
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Print JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Serve the JSON API
    Serve {
        /// Listening port, overrides `server.port`
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = e
                .downcast_ref::<AirwatchError>()
                .map_or_else(|| format!("{e:#}"), AirwatchError::user_message);
            debug!("Command failed: {:?}", e);
            eprintln!("❌ {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = AirwatchConfig::load_from_path(cli.config)?;
    telemetry::init(&config.logging, cli.verbose)?;

    match cli.command {
        Command::Report { lat, lon, json } => report(&config, lat, lon, json).await,
        Command::Serve { port } => {
            let client = OpenWeatherClient::new(&config.provider)?;
            let port = port.unwrap_or(config.server.port);
            web::run(ReportBuilder::new(client), &config, port).await
        }
    }
}

async fn report(
    config: &AirwatchConfig,
    lat: Option<f64>,
    lon: Option<f64>,
    json: bool,
) -> Result<()> {
    let coordinate = Coordinate::new(
        lat.unwrap_or(config.defaults.latitude),
        lon.unwrap_or(config.defaults.longitude),
    )?;

    let client = OpenWeatherClient::new(&config.provider)?;
    let report = ReportBuilder::new(client)
        .build_report(coordinate)
        .await
        .map_err(AirwatchError::from)?;

    if json {
        let output =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{output}");
    } else {
        print!("{report}");
    }
    Ok(())
}
