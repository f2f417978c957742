//! Feedback bounds invariant: recorded scores never exceed the code length.

use super::Invariant;
use crate::typestate::GameInProgress;

/// Invariant: Every recorded turn is internally consistent.
///
/// Each submitted guess has exactly `code_length` pegs, and its feedback
/// satisfies `exact + inexact <= code_length`. Both follow from one-to-one
/// match consumption in the scoring rules.
pub struct FeedbackBoundsInvariant;

impl Invariant<GameInProgress> for FeedbackBoundsInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let code_length = game.config().code_length();
        game.history().iter().all(|turn| {
            turn.guess().len() == code_length
                && turn.feedback().exact() + turn.feedback().inexact() <= code_length
        })
    }

    fn description() -> &'static str {
        "Recorded feedback never exceeds the code length"
    }
}
