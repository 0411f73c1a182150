//! Win-finality invariant: a correct attempt ends the log.

use super::Invariant;
use crate::games::capitals::GuessSession;

/// Invariant: a correct attempt, if present, is the last one.
///
/// The win transition is terminal, so no guess can follow the winning one.
/// This also rules out more than one correct attempt per round.
pub struct WinIsFinal;

impl Invariant for WinIsFinal {
    fn holds(session: &GuessSession) -> bool {
        match session.attempts().iter().position(|a| a.correct()) {
            Some(index) => index == session.attempts().len() - 1,
            None => true,
        }
    }

    fn description() -> &'static str {
        "a correct attempt is always the last one"
    }
}
