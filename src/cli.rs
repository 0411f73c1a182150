//! Command-line interface for weatherle.

use clap::{Parser, Subcommand};

/// WeatherLe - guess the capital city behind the forecast
#[derive(Parser, Debug)]
#[command(name = "weatherle")]
#[command(about = "Capital-city guessing game with weather-oracle feedback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive round against the worker oracle
    Play {
        /// Path to the game configuration file
        #[arg(short, long, default_value = "weatherle.toml")]
        config: std::path::PathBuf,

        /// Worker base URL (overrides config file and environment)
        #[arg(long)]
        worker_url: Option<String>,
    },

    /// Print roster capitals matching a prefix
    Suggest {
        /// Prefix to match against the capital roster
        prefix: String,

        /// Maximum number of matches to print
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Fetch and print the forecast for the current secret city
    Forecast {
        /// Path to the game configuration file
        #[arg(short, long, default_value = "weatherle.toml")]
        config: std::path::PathBuf,
    },
}
