//! Logical contract for the external guess-evaluation service.
//!
//! The game logic depends only on this trait; the wire format lives with the
//! HTTP client that implements it.

use crate::weather::WeatherReport;
use async_trait::async_trait;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

/// The oracle's answer for a single guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Distance from the guess to the secret city, in kilometers.
    /// Non-negative. Serialized as `distance` on the wire.
    #[serde(rename = "distance")]
    pub distance_km: f64,
    /// Compass label pointing from the guess toward the secret city.
    pub direction: String,
    /// True iff the guess is the secret city.
    pub correct: bool,
}

/// External service that evaluates guesses against the secret city.
///
/// `evaluate` is the only gameplay dependency. `conditions` feeds the
/// display-only forecast and the end-of-round reveal; the game logic never
/// reads it for decisions.
#[async_trait]
pub trait Oracle {
    /// Evaluates a normalized guess against the current secret city.
    async fn evaluate(&self, guess: &str) -> Result<Verdict, OracleError>;

    /// Fetches the forecast payload for the secret city.
    async fn conditions(&self) -> Result<WeatherReport, OracleError>;
}

/// Oracle failure: request, transport, or parse.
///
/// Always recoverable; a failed call never consumes an attempt, so the
/// player can retry immediately.
#[derive(Debug, Clone, Display, Error)]
#[display("oracle error: {} at {}:{}", message, file, line)]
pub struct OracleError {
    /// Error message.
    pub message: String,
    /// Line number where the error was created.
    pub line: u32,
    /// Source file where the error was created.
    pub file: &'static str,
}

impl OracleError {
    /// Creates a new oracle error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        error!(error_message = %message, "Oracle error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
