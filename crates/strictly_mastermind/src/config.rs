//! Validated game configuration.

use crate::types::Palette;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Construction-time configuration for a game.
///
/// A `GameConfig` is validated against the palette it will play over, so a
/// without-replacement game can never ask for a longer code than the palette
/// can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    code_length: usize,
    max_attempts: usize,
    allow_duplicates: bool,
}

/// Error raised by invalid game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// The code must hold at least one peg.
    #[display("Code length must be at least 1")]
    ZeroCodeLength,

    /// The player must get at least one attempt.
    #[display("Max attempts must be at least 1")]
    ZeroMaxAttempts,

    /// Without replacement, the palette cannot supply enough distinct pegs.
    #[display(
        "Code length {} exceeds palette size {} with duplicates disallowed",
        code_length,
        palette_size
    )]
    CodeLengthExceedsPalette {
        /// The requested code length.
        code_length: usize,
        /// The number of pegs available.
        palette_size: usize,
    },

    /// The palette holds no pegs at all.
    #[display("Palette is empty")]
    EmptyPalette,

    /// A supplied secret does not match the configured code length.
    #[display("Secret has {} pegs, expected {}", actual, expected)]
    CodeLengthMismatch {
        /// The configured code length.
        expected: usize,
        /// The length of the supplied secret.
        actual: usize,
    },
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Fails fast at construction rather than producing a truncated or
    /// duplicated code later:
    /// - [`ConfigError::ZeroCodeLength`] when `code_length == 0`
    /// - [`ConfigError::ZeroMaxAttempts`] when `max_attempts == 0`
    /// - [`ConfigError::EmptyPalette`] when the palette holds no pegs
    /// - [`ConfigError::CodeLengthExceedsPalette`] when duplicates are
    ///   disallowed and the palette is too small
    #[instrument(skip(palette))]
    pub fn new(
        code_length: usize,
        max_attempts: usize,
        allow_duplicates: bool,
        palette: &Palette,
    ) -> Result<Self, ConfigError> {
        if code_length == 0 {
            return Err(ConfigError::ZeroCodeLength);
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if !allow_duplicates && code_length > palette.len() {
            return Err(ConfigError::CodeLengthExceedsPalette {
                code_length,
                palette_size: palette.len(),
            });
        }
        Ok(Self {
            code_length,
            max_attempts,
            allow_duplicates,
        })
    }

    /// Returns the fixed length of the secret code.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Returns the number of attempts a player starts with.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns true if the secret may repeat pegs.
    pub fn allow_duplicates(&self) -> bool {
        self.allow_duplicates
    }
}

impl Default for GameConfig {
    /// The classic setup: a four-peg code, ten attempts, duplicates allowed.
    fn default() -> Self {
        Self {
            code_length: 4,
            max_attempts: 10,
            allow_duplicates: true,
        }
    }
}
