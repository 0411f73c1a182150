//! Status-consistency invariant: the status tag matches the attempt log.

use super::Invariant;
use crate::games::capitals::{GameStatus, GuessSession};

/// Invariant: the status is fully determined by the attempt log.
///
/// `Won` iff some attempt is correct; `Lost` iff the log is full with no
/// correct attempt; `Playing` otherwise.
pub struct StatusConsistent;

impl Invariant for StatusConsistent {
    fn holds(session: &GuessSession) -> bool {
        let any_correct = session.attempts().iter().any(|a| a.correct());
        match session.status() {
            GameStatus::Won => any_correct,
            GameStatus::Lost => {
                session.attempts().len() == session.max_attempts() && !any_correct
            }
            GameStatus::Playing => {
                !any_correct && session.attempts().len() < session.max_attempts()
            }
        }
    }

    fn description() -> &'static str {
        "status tag matches the attempt log"
    }
}
