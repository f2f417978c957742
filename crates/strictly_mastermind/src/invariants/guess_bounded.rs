//! Guess capacity invariant.

use super::Invariant;
use crate::typestate::GameInProgress;

/// Invariant: The guess under construction never exceeds the code length.
///
/// The builder refuses appends once full; this checks no other path grew
/// the guess past capacity, and that the builder is bounded by the same
/// length the game was configured with.
pub struct GuessBoundedInvariant;

impl Invariant<GameInProgress> for GuessBoundedInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let code_length = game.config().code_length();
        game.current_guess().len() <= code_length
            && game.current_guess().required_length() == code_length
    }

    fn description() -> &'static str {
        "Current guess is bounded by the code length"
    }
}
