//! Serializable game wrapper with total command handling.
//!
//! Typestate phases make invalid operations unrepresentable for typed
//! callers, but the rendering/input collaborator speaks a plain command
//! stream. `AnyGame` wraps the phases into one enum whose [`AnyGame::apply`]
//! is total: every command in every phase either performs its effect or is a
//! well-defined no-op, and none errors.

use crate::action::Command;
use crate::guess::Guess;
use crate::sequence::Sequence;
use crate::types::Peg;
use crate::typestate::{GameFinished, GameInProgress, Outcome, Turn, TurnResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Status tag exposed to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The player cracked the code.
    Won,
    /// The player ran out of attempts.
    Lost,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won => write!(f, "You won!"),
            GameStatus::Lost => write!(f, "You lost!"),
        }
    }
}

/// Wrapper for a game in any phase.
///
/// Since typestate phases are distinct types, this enum wraps them for
/// serialization and for consumers that hold "a game" without tracking its
/// phase in their own types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGame {
    /// Game in progress.
    InProgress(GameInProgress),
    /// Game finished, won or lost.
    Finished(GameFinished),
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress(game)
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished(game)
    }
}

impl From<TurnResult> for AnyGame {
    fn from(result: TurnResult) -> Self {
        match result {
            TurnResult::InProgress(game) => game.into(),
            TurnResult::Finished(game) => game.into(),
        }
    }
}

impl AnyGame {
    /// Applies a command, consuming the game and returning its successor.
    ///
    /// Total by design of the command surface: terminal phases ignore every
    /// command, an out-of-range palette selection is ignored, and submitting
    /// an incomplete guess consumes nothing.
    #[instrument(skip(self))]
    pub fn apply(self, command: Command) -> Self {
        match self {
            AnyGame::InProgress(game) => match command {
                Command::AppendPeg(index) => AnyGame::InProgress(game.select_peg(index)),
                Command::RemoveLastPeg => AnyGame::InProgress(game.remove_last_peg()),
                Command::SubmitGuess => match game.clone().submit() {
                    Ok(result) => result.into(),
                    Err(err) => {
                        debug!(error = %err, "submission rejected; command ignored");
                        AnyGame::InProgress(game)
                    }
                },
            },
            AnyGame::Finished(game) => {
                warn!(%command, "game is over; command ignored");
                AnyGame::Finished(game)
            }
        }
    }

    /// Returns the status tag for this phase.
    pub fn status(&self) -> GameStatus {
        match self {
            AnyGame::InProgress(_) => GameStatus::InProgress,
            AnyGame::Finished(game) => match game.outcome() {
                Outcome::Won => GameStatus::Won,
                Outcome::Lost => GameStatus::Lost,
            },
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished(_))
    }

    /// Returns the submitted turns, oldest first, for any phase.
    pub fn history(&self) -> &[Turn] {
        match self {
            AnyGame::InProgress(game) => game.history(),
            AnyGame::Finished(game) => game.history(),
        }
    }

    /// Returns the guess under construction, if the game is in progress.
    pub fn current_guess(&self) -> Option<&Guess> {
        match self {
            AnyGame::InProgress(game) => Some(game.current_guess()),
            AnyGame::Finished(_) => None,
        }
    }

    /// Returns the number of attempts left.
    pub fn remaining_attempts(&self) -> usize {
        match self {
            AnyGame::InProgress(game) => game.remaining_attempts(),
            AnyGame::Finished(game) => game.remaining_attempts(),
        }
    }

    /// Returns the secret once the game is over; `None` while in progress.
    ///
    /// Renderers that want to draw the hidden code row before the end can
    /// go through the in-progress phase directly.
    pub fn revealed_secret(&self) -> Option<&Sequence<Peg>> {
        match self {
            AnyGame::InProgress(_) => None,
            AnyGame::Finished(game) => Some(game.secret()),
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyGame::InProgress(game) => format!(
                "In progress. {} attempts remaining.",
                game.remaining_attempts()
            ),
            AnyGame::Finished(game) => format!("Game over. {}", game.outcome()),
        }
    }
}
