//! Bounded-attempts invariant: the log never exceeds the budget.

use super::Invariant;
use crate::games::capitals::GuessSession;

/// Invariant: `attempts.len() <= max_attempts` at all times.
///
/// `submit_guess` refuses input once the budget is spent, and the loss
/// transition fires exactly when the log fills, so a longer log is
/// unreachable through the public API.
pub struct BoundedAttempts;

impl Invariant for BoundedAttempts {
    fn holds(session: &GuessSession) -> bool {
        session.attempts().len() <= session.max_attempts()
    }

    fn description() -> &'static str {
        "attempt log never exceeds max_attempts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::capitals::GuessAttempt;

    #[test]
    fn test_empty_session_holds() {
        let session = GuessSession::new();
        assert!(BoundedAttempts::holds(&session));
    }

    #[test]
    fn test_full_log_holds() {
        let mut session = GuessSession::with_max_attempts(2);
        session.attempts = vec![
            GuessAttempt::new("rome".to_string(), 1100.0, "NW".to_string(), false),
            GuessAttempt::new("oslo".to_string(), 1300.0, "S".to_string(), false),
        ];
        assert!(BoundedAttempts::holds(&session));
    }

    #[test]
    fn test_overfull_log_violates() {
        let mut session = GuessSession::with_max_attempts(1);
        session.attempts = vec![
            GuessAttempt::new("rome".to_string(), 1100.0, "NW".to_string(), false),
            GuessAttempt::new("oslo".to_string(), 1300.0, "S".to_string(), false),
        ];
        assert!(!BoundedAttempts::holds(&session));
    }
}
