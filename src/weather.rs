//! Display-only weather data served alongside the game.
//!
//! The forecast is flavor for the player; the game logic never reads it.
//! The report also carries the secret city's name, which the host reveals
//! once a round reaches a terminal state.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One hourly forecast sample.
///
/// The worker sends more fields per hour; only the temperature is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    /// Temperature in degrees Celsius.
    pub temp_c: f64,
}

/// Forecast payload for the secret city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Name of the secret city. Display-only, for the end-of-round reveal.
    pub city: String,
    /// Hourly temperature samples, earliest first.
    #[serde(rename = "hourlyData", default)]
    pub hourly: Vec<HourlySample>,
}

impl WeatherReport {
    /// Formats the first 24 samples as a plain text table.
    pub fn forecast_table(&self) -> String {
        let mut table = String::from("24-hour temperature forecast\n");
        if self.hourly.is_empty() {
            table.push_str("  (no samples)\n");
            return table;
        }
        for (hour, sample) in self.hourly.iter().take(24).enumerate() {
            let _ = writeln!(table, "  {:>2}:00  {:>6.1}°C", hour, sample.temp_c);
        }
        table
    }

    /// The secret city's name, for the end-of-round reveal.
    pub fn secret_city(&self) -> &str {
        &self.city
    }
}
