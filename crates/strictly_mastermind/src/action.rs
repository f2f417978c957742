//! First-class command types for mastermind.
//!
//! Commands are domain events, not side effects. A renderer decodes raw
//! input into this stream; the engine consumes it one command at a time.

use serde::{Deserialize, Serialize};

/// A command issued by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Append the peg at the given 1-based palette index to the current
    /// guess. An index outside the palette is ignored.
    AppendPeg(usize),
    /// Remove the most recently entered peg from the current guess.
    RemoveLastPeg,
    /// Submit the current guess for scoring. Ignored unless the guess is
    /// complete.
    SubmitGuess,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::AppendPeg(index) => write!(f, "append peg {}", index),
            Command::RemoveLastPeg => write!(f, "remove last peg"),
            Command::SubmitGuess => write!(f, "submit guess"),
        }
    }
}

/// Error that can occur when validating or applying a guess submission.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SubmitError {
    /// The guess has not reached the required length.
    #[display("Guess has {} of {} pegs", have, need)]
    IncompleteGuess {
        /// Pegs entered so far.
        have: usize,
        /// Pegs required for submission.
        need: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SubmitError {}
