//! Attempts accounting invariant.

use super::Invariant;
use crate::typestate::GameInProgress;

/// Invariant: Attempts are conserved.
///
/// Every recorded turn consumed exactly one attempt, so
/// `remaining_attempts + history.len() == max_attempts` at all times. An
/// in-progress game additionally has at least one attempt left; a game with
/// zero remaining attempts must already have finished.
pub struct AttemptsConsistentInvariant;

impl Invariant<GameInProgress> for AttemptsConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.remaining_attempts() >= 1
            && game.remaining_attempts() + game.history().len() == game.config().max_attempts()
    }

    fn description() -> &'static str {
        "Remaining attempts plus recorded turns equal max attempts"
    }
}
