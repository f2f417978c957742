//! Phase-typed game engine for mastermind.
//!
//! Each phase is its own distinct type with phase-specific fields:
//! `GameSetup` holds only configuration, `GameInProgress` accepts guesses,
//! and `GameFinished` ALWAYS has an outcome, not `Option<Outcome>`.
//! Submissions are consuming transitions returning an explicit
//! [`TurnResult`].

use crate::action::SubmitError;
use crate::config::{ConfigError, GameConfig};
use crate::contracts::{Contract, SubmitContract};
use crate::generator;
use crate::guess::Guess;
use crate::rules::{self, Feedback};
use crate::sequence::Sequence;
use crate::types::{Palette, Peg};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: configured but without a secret yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    config: GameConfig,
    palette: Palette,
}

impl GameSetup {
    /// Creates a game in setup phase from a validated configuration.
    #[instrument]
    pub fn new(config: GameConfig, palette: Palette) -> Self {
        Self { config, palette }
    }

    /// The classic setup: standard palette, four-peg code, ten attempts,
    /// duplicates allowed.
    pub fn standard() -> Self {
        Self::new(GameConfig::default(), Palette::standard())
    }

    /// Returns the configuration.
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Returns the palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Generates the secret and starts the game (consumes setup, returns
    /// in-progress).
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from the generator when the configuration
    /// and palette disagree (for example a config validated against a wider
    /// palette than the one supplied here).
    #[instrument(skip(self, rng))]
    pub fn start<R: Rng>(self, rng: &mut R) -> Result<GameInProgress, ConfigError> {
        let secret = generator::generate(
            self.config.code_length(),
            &self.palette,
            self.config.allow_duplicates(),
            rng,
        )?;
        debug!(code_length = self.config.code_length(), "secret generated");
        Ok(GameInProgress {
            current: Guess::empty(self.config.code_length()),
            remaining_attempts: self.config.max_attempts(),
            config: self.config,
            palette: self.palette,
            secret,
            history: Vec::new(),
        })
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::standard()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// A submitted guess together with its feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub(crate) guess: Sequence<Peg>,
    pub(crate) feedback: Feedback,
}

impl Turn {
    pub(crate) fn new(guess: Sequence<Peg>, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Returns the submitted guess.
    pub fn guess(&self) -> &Sequence<Peg> {
        &self.guess
    }

    /// Returns the feedback the guess scored.
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Game in progress: accepts guess edits and submissions.
///
/// Invariants enforced by type:
/// - A secret exists (generated at start).
/// - No outcome yet (outcome lives in [`GameFinished`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    pub(crate) config: GameConfig,
    pub(crate) palette: Palette,
    pub(crate) secret: Sequence<Peg>,
    pub(crate) history: Vec<Turn>,
    pub(crate) current: Guess,
    pub(crate) remaining_attempts: usize,
}

impl GameInProgress {
    /// Creates an in-progress game over a known secret.
    ///
    /// Intended for fixed-code games and tests; normal play goes through
    /// [`GameSetup::start`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CodeLengthMismatch`] when the secret's length
    /// differs from the configured code length.
    #[instrument(skip(secret))]
    pub fn with_secret(
        config: GameConfig,
        palette: Palette,
        secret: Sequence<Peg>,
    ) -> Result<Self, ConfigError> {
        if secret.len() != config.code_length() {
            return Err(ConfigError::CodeLengthMismatch {
                expected: config.code_length(),
                actual: secret.len(),
            });
        }
        Ok(Self {
            current: Guess::empty(config.code_length()),
            remaining_attempts: config.max_attempts(),
            config,
            palette,
            secret,
            history: Vec::new(),
        })
    }

    /// Appends a peg to the current guess; no-op once the guess is full.
    pub fn append_peg(mut self, peg: Peg) -> Self {
        self.current = self.current.append(peg);
        self
    }

    /// Appends the peg at the given 1-based palette index.
    ///
    /// An index outside the palette is ignored, matching the treatment of
    /// malformed input as an ignorable command rather than a fault.
    #[instrument(skip(self))]
    pub fn select_peg(self, index: usize) -> Self {
        match self.palette.select(index) {
            Some(peg) => self.append_peg(peg),
            None => {
                debug!(index, "palette selection out of range; ignored");
                self
            }
        }
    }

    /// Removes the most recently entered peg; no-op when the guess is empty.
    pub fn remove_last_peg(mut self) -> Self {
        self.current = self.current.remove_last();
        self
    }

    /// Submits the current guess, consuming self and transitioning to the
    /// next state.
    ///
    /// On success the guess is scored, the turn recorded, one attempt
    /// consumed, and the builder reset. A winning guess finishes the game
    /// as [`Outcome::Won`] even on the final attempt; only a non-winning
    /// guess that exhausts the attempts finishes as [`Outcome::Lost`].
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (guess must be complete)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::IncompleteGuess`] when the guess has not
    /// reached the code length. Nothing is consumed or recorded in that
    /// case.
    #[instrument(skip(self), fields(remaining = self.remaining_attempts))]
    pub fn submit(self) -> Result<TurnResult, SubmitError> {
        SubmitContract::pre(&self)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        let guess = game.current.pegs().clone();
        let feedback = rules::score(&game.secret, &guess);
        debug!(%feedback, "guess scored");

        game.history.push(Turn::new(guess, feedback));
        game.remaining_attempts -= 1;
        game.current = Guess::empty(game.config.code_length());

        // Win check precedes the exhausted-attempts check: a winning guess
        // on the final attempt resolves to Won, never Lost.
        if feedback.is_winning(game.config.code_length()) {
            return Ok(TurnResult::Finished(game.finish(Outcome::Won)));
        }
        if game.remaining_attempts == 0 {
            return Ok(TurnResult::Finished(game.finish(Outcome::Lost)));
        }

        #[cfg(debug_assertions)]
        SubmitContract::post(&before, &game)?;

        Ok(TurnResult::InProgress(game))
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        GameFinished {
            config: self.config,
            palette: self.palette,
            secret: self.secret,
            history: self.history,
            remaining_attempts: self.remaining_attempts,
            outcome,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Returns the palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns the secret code.
    ///
    /// The engine does not gate access; whether to reveal the secret before
    /// the game ends is the renderer's concern.
    pub fn secret(&self) -> &Sequence<Peg> {
        &self.secret
    }

    /// Returns the submitted turns, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Returns the guess under construction.
    pub fn current_guess(&self) -> &Guess {
        &self.current
    }

    /// Returns the number of attempts left.
    pub fn remaining_attempts(&self) -> usize {
        self.remaining_attempts
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player cracked the code.
    Won,
    /// The player ran out of attempts.
    Lost,
}

impl Outcome {
    /// Returns true if the player cracked the code.
    pub fn is_won(&self) -> bool {
        matches!(self, Outcome::Won)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => write!(f, "You won!"),
            Outcome::Lost => write!(f, "You lost!"),
        }
    }
}

/// Game finished: outcome determined, secret revealed.
///
/// The outcome is ALWAYS present, and no transition leads back out of this
/// phase except an explicit [`GameFinished::restart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    pub(crate) config: GameConfig,
    pub(crate) palette: Palette,
    pub(crate) secret: Sequence<Peg>,
    pub(crate) history: Vec<Turn>,
    pub(crate) remaining_attempts: usize,
    pub(crate) outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome. Never an Option; finishing guarantees one.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the secret code, now safe to reveal.
    pub fn secret(&self) -> &Sequence<Peg> {
        &self.secret
    }

    /// Returns the submitted turns, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Returns the configuration.
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Returns the attempts left unused at the end of the game.
    pub fn remaining_attempts(&self) -> usize {
        self.remaining_attempts
    }

    /// Restarts with the same configuration and palette (consumes finished,
    /// returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new(self.config, self.palette)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of submitting a guess.
#[derive(Debug)]
pub enum TurnResult {
    /// Game continues with attempts remaining.
    InProgress(GameInProgress),
    /// Game finished, won or lost.
    Finished(GameFinished),
}
