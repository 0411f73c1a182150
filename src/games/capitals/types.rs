//! Core domain types for the capital-guessing game.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Status of a game round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Round is ongoing; guesses are accepted.
    Playing,
    /// The secret city was guessed. Terminal.
    Won,
    /// All attempts were used without a correct guess. Terminal.
    Lost,
}

impl GameStatus {
    /// Returns true once the round has reached a terminal state.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// One recorded, oracle-confirmed guess and its outcome.
///
/// Attempts are created once per accepted guess, appended to the session log
/// in submission order, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct GuessAttempt {
    /// The normalized guess that was submitted.
    city: String,
    /// Distance from the guess to the secret city, in kilometers.
    distance_km: f64,
    /// Compass label pointing from the guess toward the secret city.
    /// Opaque to the game logic.
    direction: String,
    /// True iff this guess was the secret city.
    correct: bool,
}

impl GuessAttempt {
    /// The guessed city.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Distance to the secret city in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Compass direction toward the secret city.
    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// Whether this guess won the round.
    pub fn correct(&self) -> bool {
        self.correct
    }
}
