//! WeatherLe library - capital-city guessing game
//!
//! One round of WeatherLe: the player guesses a secret capital city from a
//! fixed roster and an external oracle reports distance, direction, and
//! correctness for each guess, within a budget of six attempts.
//!
//! # Architecture
//!
//! - **CandidateIndex**: fixed, normalized universe of valid capitals with
//!   prefix-based autocomplete lookups
//! - **GuessSession**: per-round state machine (playing, won, lost)
//! - **Oracle**: contract for the external guess-evaluation service
//! - **WorkerClient**: HTTP implementation of the oracle against the
//!   weather worker
//! - **App**: thin interactive terminal host
//!
//! # Example
//!
//! ```
//! use weatherle::{CandidateIndex, GameStatus, GuessSession};
//!
//! let index = CandidateIndex::builtin();
//! assert!(index.contains("paris"));
//! assert_eq!(index.suggest("pa", 3), vec!["paris", "papeete", "palikir"]);
//!
//! let session = GuessSession::new();
//! assert_eq!(session.status(), GameStatus::Playing);
//! assert_eq!(session.remaining(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod cli;
mod config;
mod games;
mod oracle;
mod weather;
mod worker_client;

// Crate-level exports - Host
pub use app::run_round;
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (capitals)
pub use games::capitals::{
    CandidateIndex, GameStatus, GuessAttempt, GuessError, GuessSession, Submission, CAPITALS,
    DEFAULT_SUGGESTION_LIMIT, MAX_ATTEMPTS,
};

// Crate-level exports - Session invariants
pub use games::capitals::invariants;

// Crate-level exports - Oracle contract and client
pub use oracle::{Oracle, OracleError, Verdict};
pub use weather::{HourlySample, WeatherReport};
pub use worker_client::WorkerClient;
