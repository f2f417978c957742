//! Secret code generation.
//!
//! Draws pegs uniformly from the currently available palette. Without
//! replacement, each drawn peg is removed from a working copy of the palette
//! before the next draw, so a full-width code is a permutation of the
//! palette. Given a fixed RNG seed the result is fully reproducible.

use crate::config::ConfigError;
use crate::sequence::Sequence;
use crate::types::{Palette, Peg};
use rand::Rng;
use tracing::instrument;

/// Generates a secret code of `length` pegs over `palette`.
///
/// # Errors
///
/// - [`ConfigError::EmptyPalette`] when asked to draw from an empty palette.
/// - [`ConfigError::CodeLengthExceedsPalette`] when duplicates are
///   disallowed and `length` exceeds the palette size. Generation re-checks
///   this even though [`GameConfig::new`](crate::GameConfig::new) already
///   rejects it, since the generator is callable on its own.
#[instrument(skip(rng))]
pub fn generate<R: Rng>(
    length: usize,
    palette: &Palette,
    allow_duplicates: bool,
    rng: &mut R,
) -> Result<Sequence<Peg>, ConfigError> {
    if length > 0 && palette.is_empty() {
        return Err(ConfigError::EmptyPalette);
    }
    if !allow_duplicates && length > palette.len() {
        return Err(ConfigError::CodeLengthExceedsPalette {
            code_length: length,
            palette_size: palette.len(),
        });
    }

    let mut available: Sequence<Peg> = palette.pegs().iter().copied().collect();
    let mut code = Sequence::new();
    for _ in 0..length {
        let index = rng.random_range(0..available.len());
        let peg = *available
            .get(index)
            .expect("draw index is bounded by the available palette length");
        code = code.push_front(peg);
        if !allow_duplicates {
            available = available.remove_at(index);
        }
    }
    Ok(code)
}
