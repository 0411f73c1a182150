//! WeatherLe - capital-city guessing CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use weatherle::{Cli, Command, CandidateIndex, GameConfig, Oracle, WorkerClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Keep gameplay output clean unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, worker_url } => run_play(config, worker_url).await,
        Command::Suggest { prefix, limit } => run_suggest(&prefix, limit),
        Command::Forecast { config } => run_forecast(config).await,
    }
}

/// Runs an interactive round.
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(config_path: PathBuf, worker_url: Option<String>) -> Result<()> {
    let mut config = load_config(&config_path)?.with_env_overrides();

    // CLI flag wins over both the file and the environment
    if let Some(url) = worker_url {
        info!(worker_url = %url, "Overriding worker URL from command line");
        config = config.with_worker_url(url);
    }

    weatherle::run_round(config).await
}

/// Prints roster capitals matching the prefix.
fn run_suggest(prefix: &str, limit: usize) -> Result<()> {
    let index = CandidateIndex::builtin();
    let matches = index.suggest(prefix, limit);

    if matches.is_empty() {
        println!("No capitals match \"{}\"", prefix);
    } else {
        for city in matches {
            println!("{city}");
        }
    }
    Ok(())
}

/// Fetches and prints the forecast for the current secret city.
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_forecast(config_path: PathBuf) -> Result<()> {
    let config = load_config(&config_path)?.with_env_overrides();
    let oracle = WorkerClient::new(config.worker_url().clone());

    let report = oracle.conditions().await?;
    println!("{}", report.forecast_table());
    Ok(())
}

/// Loads game configuration, falling back to defaults if the file is absent.
#[instrument(skip(config_path))]
fn load_config(config_path: &Path) -> Result<GameConfig> {
    if config_path.exists() {
        info!(path = %config_path.display(), "Loading game configuration");
        Ok(GameConfig::from_file(config_path)?)
    } else {
        info!(
            path = %config_path.display(),
            "Config file not found, using defaults"
        );
        Ok(GameConfig::default())
    }
}
