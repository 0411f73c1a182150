mod index;
mod roster;
mod session;
mod types;

pub mod invariants;

pub use index::{CandidateIndex, DEFAULT_SUGGESTION_LIMIT};
pub use roster::CAPITALS;
pub use session::{GuessError, GuessSession, Submission, MAX_ATTEMPTS};
pub use types::{GameStatus, GuessAttempt};
