//! First-class invariants for the guess session.
//!
//! Invariants are logical properties that must hold for every reachable
//! session state. They are testable independently and double as
//! documentation of the state machine's guarantees.

use super::session::GuessSession;

mod bounded_attempts;
mod status_consistent;
mod win_is_final;

pub use bounded_attempts::BoundedAttempts;
pub use status_consistent::StatusConsistent;
pub use win_is_final::WinIsFinal;

/// A logical property that must hold for a session state.
pub trait Invariant {
    /// Checks whether the invariant holds for the given session.
    fn holds(session: &GuessSession) -> bool;

    /// Human-readable description of the guarantee.
    fn description() -> &'static str;
}

/// Checks every session invariant.
///
/// Returns the descriptions of the invariants that fail, or `Ok(())` when
/// all of them hold.
pub fn verify_all(session: &GuessSession) -> Result<(), Vec<&'static str>> {
    let mut violations = Vec::new();
    if !BoundedAttempts::holds(session) {
        violations.push(BoundedAttempts::description());
    }
    if !StatusConsistent::holds(session) {
        violations.push(StatusConsistent::description());
    }
    if !WinIsFinal::holds(session) {
        violations.push(WinIsFinal::description());
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::capitals::{GameStatus, GuessAttempt};

    fn miss(city: &str, km: f64) -> GuessAttempt {
        GuessAttempt::new(city.to_string(), km, "NE".to_string(), false)
    }

    fn hit(city: &str) -> GuessAttempt {
        GuessAttempt::new(city.to_string(), 0.0, "-".to_string(), true)
    }

    #[test]
    fn test_fresh_session_satisfies_all() {
        let session = GuessSession::new();
        assert!(verify_all(&session).is_ok());
    }

    #[test]
    fn test_won_session_satisfies_all() {
        let mut session = GuessSession::new();
        session.attempts = vec![miss("rome", 1100.0), hit("paris")];
        session.status = GameStatus::Won;
        assert!(verify_all(&session).is_ok());
    }

    #[test]
    fn test_lost_session_satisfies_all() {
        let mut session = GuessSession::with_max_attempts(2);
        session.attempts = vec![miss("rome", 1100.0), miss("oslo", 1300.0)];
        session.status = GameStatus::Lost;
        assert!(verify_all(&session).is_ok());
    }

    #[test]
    fn test_corrupted_session_reports_every_violation() {
        let mut session = GuessSession::with_max_attempts(1);
        // Overfull log, playing status despite a non-final correct attempt.
        session.attempts = vec![hit("paris"), miss("rome", 1100.0)];
        session.status = GameStatus::Playing;

        let violations = verify_all(&session).expect_err("corrupted state");
        assert_eq!(violations.len(), 3);
    }
}
