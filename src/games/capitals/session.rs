//! Guess-session state machine for a single round.

use super::index::CandidateIndex;
use super::types::{GameStatus, GuessAttempt};
use crate::oracle::{Oracle, OracleError};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Number of guesses a round allows.
pub const MAX_ATTEMPTS: usize = 6;

/// Errors from submitting a guess.
///
/// Both variants are recoverable and leave the session untouched: no attempt
/// is recorded and the status does not change. `UnknownCity` is meant to be
/// shown transiently; when it should disappear again is the host's business.
#[derive(Debug, Clone, Display, Error)]
pub enum GuessError {
    /// The guess is not in the candidate roster. The oracle was never asked.
    #[display("\"{}\" is not a recognized capital city", city)]
    UnknownCity {
        /// The normalized guess that was rejected.
        city: String,
    },
    /// The oracle call failed, so the guess effectively was not submitted.
    #[display("guess evaluation unavailable: {}", source)]
    Unavailable {
        /// The underlying oracle failure.
        source: OracleError,
    },
}

/// Result of a `submit_guess` call that did not error.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The guess was evaluated and appended to the attempt log.
    Recorded {
        /// The attempt just recorded.
        attempt: GuessAttempt,
        /// Session status after the transition.
        status: GameStatus,
    },
    /// The input was ignored: empty guess, terminal status, or exhausted
    /// attempts. The host is expected to have disabled input in those
    /// states, so this is a silent double-check rather than an error.
    Ignored,
}

/// State machine governing one round of the game.
///
/// The session exclusively owns its attempt log. The candidate index is a
/// shared, read-only collaborator that outlives any single round. Callers
/// must serialize submissions: at most one `submit_guess` in flight per
/// session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessSession {
    /// Recorded attempts in submission order. Append-only.
    pub(crate) attempts: Vec<GuessAttempt>,
    /// Current round status.
    pub(crate) status: GameStatus,
    /// Attempt budget for the round.
    pub(crate) max_attempts: usize,
}

impl GuessSession {
    /// Creates a session with the standard six-guess budget.
    #[instrument]
    pub fn new() -> Self {
        Self::with_max_attempts(MAX_ATTEMPTS)
    }

    /// Creates a session with a custom attempt budget.
    #[instrument]
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        info!(max_attempts, "Creating new guess session");
        Self {
            attempts: Vec::new(),
            status: GameStatus::Playing,
            max_attempts,
        }
    }

    /// Recorded attempts in submission order.
    pub fn attempts(&self) -> &[GuessAttempt] {
        &self.attempts
    }

    /// Current round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Attempt budget for the round.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Guesses left before the round is lost.
    pub fn remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts.len())
    }

    /// Submits a raw guess for evaluation.
    ///
    /// The guess is normalized and validated against the index before the
    /// oracle round-trip, so invalid input never costs an attempt. An oracle
    /// failure does not cost one either: the failure says nothing about the
    /// guess, and the player keeps all remaining tries.
    ///
    /// Returns `Submission::Ignored` without touching the session when the
    /// guess is empty, the round is over, or the attempt budget is spent.
    ///
    /// # Errors
    ///
    /// - `GuessError::UnknownCity` if the guess is not in the roster.
    /// - `GuessError::Unavailable` if the oracle call fails.
    #[instrument(skip(self, index, oracle), fields(status = %self.status, attempts = self.attempts.len()))]
    pub async fn submit_guess<O>(
        &mut self,
        raw: &str,
        index: &CandidateIndex,
        oracle: &O,
    ) -> Result<Submission, GuessError>
    where
        O: Oracle + ?Sized,
    {
        let city = CandidateIndex::normalize(raw);

        if city.is_empty() || self.status.is_over() || self.attempts.len() >= self.max_attempts {
            debug!("Submission ignored");
            return Ok(Submission::Ignored);
        }

        if !index.contains(&city) {
            debug!(%city, "Guess not in candidate roster");
            return Err(GuessError::UnknownCity { city });
        }

        let verdict = oracle.evaluate(&city).await.map_err(|source| {
            warn!(%city, error = %source, "Oracle call failed; no attempt consumed");
            GuessError::Unavailable { source }
        })?;

        let correct = verdict.correct;
        let attempt = GuessAttempt::new(city, verdict.distance_km, verdict.direction, correct);
        self.attempts.push(attempt.clone());

        self.status = if correct {
            GameStatus::Won
        } else if self.attempts.len() == self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        info!(
            city = attempt.city(),
            distance_km = attempt.distance_km(),
            direction = attempt.direction(),
            correct,
            status = %self.status,
            attempts = self.attempts.len(),
            "Recorded guess"
        );

        Ok(Submission::Recorded {
            attempt,
            status: self.status,
        })
    }
}

impl Default for GuessSession {
    fn default() -> Self {
        Self::new()
    }
}
