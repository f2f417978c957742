//! Contract-based validation for guess submission.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing the Hoare-style reasoning: {P} submit {Q}.

use crate::action::SubmitError;
use crate::invariants::{InvariantSet, MastermindInvariants};
use crate::typestate::GameInProgress;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state
/// transitions.
pub trait Contract<S> {
    /// Checks preconditions before applying the transition.
    fn pre(state: &S) -> Result<(), SubmitError>;

    /// Checks postconditions after applying the transition.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), SubmitError>;
}

/// Precondition: The guess must have reached the code length.
pub struct GuessComplete;

impl GuessComplete {
    /// Rejects submission of a guess shorter than the code.
    #[instrument(skip(game))]
    pub fn check(game: &GameInProgress) -> Result<(), SubmitError> {
        if game.current_guess().is_complete() {
            Ok(())
        } else {
            Err(SubmitError::IncompleteGuess {
                have: game.current_guess().len(),
                need: game.current_guess().required_length(),
            })
        }
    }
}

/// Contract for guess submission.
///
/// Preconditions:
/// - Guess is complete
///
/// Postconditions (checked between consecutive in-progress states):
/// - Exactly one attempt consumed and one turn recorded
/// - Builder reset for the next guess
/// - All game invariants still hold
pub struct SubmitContract;

impl Contract<GameInProgress> for SubmitContract {
    fn pre(game: &GameInProgress) -> Result<(), SubmitError> {
        GuessComplete::check(game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), SubmitError> {
        if after.remaining_attempts() + 1 != before.remaining_attempts() {
            return Err(SubmitError::InvariantViolation(
                "Submission must consume exactly one attempt".to_string(),
            ));
        }
        if after.history().len() != before.history().len() + 1 {
            return Err(SubmitError::InvariantViolation(
                "Submission must record exactly one turn".to_string(),
            ));
        }
        if !after.current_guess().is_empty() {
            return Err(SubmitError::InvariantViolation(
                "Submission must reset the guess builder".to_string(),
            ));
        }

        MastermindInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SubmitError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typestate::{GameSetup, TurnResult};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn new_game() -> GameInProgress {
        let mut rng = SmallRng::seed_from_u64(23);
        GameSetup::standard().start(&mut rng).expect("valid config")
    }

    #[test]
    fn test_precondition_complete_guess() {
        let game = new_game().select_peg(1).select_peg(2).select_peg(3).select_peg(4);
        assert!(SubmitContract::pre(&game).is_ok());
    }

    #[test]
    fn test_precondition_incomplete_guess() {
        let game = new_game().select_peg(1);
        assert!(matches!(
            SubmitContract::pre(&game),
            Err(SubmitError::IncompleteGuess { have: 1, need: 4 })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_submission() {
        let game = new_game().select_peg(1).select_peg(1).select_peg(2).select_peg(2);
        let before = game.clone();

        if let Ok(TurnResult::InProgress(after)) = game.submit() {
            assert!(SubmitContract::post(&before, &after).is_ok());
        }
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = new_game().select_peg(1).select_peg(1).select_peg(2).select_peg(2);
        let before = game.clone();

        if let Ok(TurnResult::InProgress(mut after)) = game.submit() {
            // Corrupt the attempts counter.
            after.remaining_attempts = before.remaining_attempts();
            assert!(SubmitContract::post(&before, &after).is_err());
        }
    }
}
