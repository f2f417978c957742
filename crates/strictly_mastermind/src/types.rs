//! Core domain types for mastermind.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A peg color drawn from the finite palette.
///
/// Pegs are opaque tokens compared by identity of the variant, not by any
/// visual attribute a renderer might attach to them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Peg {
    /// Red peg.
    Red,
    /// Green peg.
    Green,
    /// Blue peg.
    Blue,
    /// Yellow peg.
    Yellow,
}

impl Peg {
    /// All pegs in stable palette order.
    pub const ALL: [Peg; 4] = [Peg::Red, Peg::Green, Peg::Blue, Peg::Yellow];

    /// Get label for this peg (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Peg::Red => "Red",
            Peg::Green => "Green",
            Peg::Blue => "Blue",
            Peg::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The ordered set of pegs a player may choose from.
///
/// Indices are stable for the lifetime of a game; the command layer selects
/// pegs 1-based (`1` is the first peg), matching the number keys a renderer
/// presents next to each color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pegs: Vec<Peg>,
}

impl Palette {
    /// Creates a palette over the given pegs, preserving order.
    #[instrument]
    pub fn new(pegs: Vec<Peg>) -> Self {
        Self { pegs }
    }

    /// The standard four-color palette.
    pub fn standard() -> Self {
        Self {
            pegs: Peg::ALL.to_vec(),
        }
    }

    /// Returns the number of pegs available.
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// Returns true if the palette holds no pegs.
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Selects a peg 1-based: `select(1)` is the first peg.
    ///
    /// Returns `None` for `0` or an index past the palette; the command
    /// layer treats that as an ignorable input, not an error.
    pub fn select(&self, index: usize) -> Option<Peg> {
        if index == 0 {
            return None;
        }
        self.pegs.get(index - 1).copied()
    }

    /// Returns the pegs in palette order.
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
