//! Game rules for mastermind.
//!
//! This module contains pure functions for evaluating guesses against the
//! secret code. Scoring is separated from game state storage so it can be
//! composed into contract systems and tested on bare sequences.

pub mod score;

pub use score::{exact_matches, inexact_matches, remove_exact_matches, score};

use serde::{Deserialize, Serialize};

/// Feedback for a submitted guess.
///
/// `exact` counts positions where guess and secret agree; `inexact` counts
/// pegs present in both (after exact matches are removed) but at the wrong
/// position. Every counted match consumes one never-reused peg from each
/// side, so `exact + inexact` never exceeds the code length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    exact: usize,
    inexact: usize,
}

impl Feedback {
    /// Creates feedback from match counts.
    pub fn new(exact: usize, inexact: usize) -> Self {
        Self { exact, inexact }
    }

    /// Number of right-peg, right-position matches.
    pub fn exact(&self) -> usize {
        self.exact
    }

    /// Number of right-peg, wrong-position matches.
    pub fn inexact(&self) -> usize {
        self.inexact
    }

    /// Returns true if every position matched for a code of `code_length`.
    pub fn is_winning(&self, code_length: usize) -> bool {
        self.exact == code_length
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Exact: {} | Inexact: {}", self.exact, self.inexact)
    }
}
