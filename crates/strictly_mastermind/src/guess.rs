//! Guess builder: accumulates player selections up to the code length.

use crate::sequence::Sequence;
use crate::types::Peg;
use serde::{Deserialize, Serialize};

/// A guess under construction.
///
/// Pegs are stored most-recently-added first: `append` conses onto the head
/// and `remove_last` drops the head. The secret code is accumulated the same
/// way, so positional scoring stays consistent between the two.
///
/// Both operations are functional updates returning a new builder; once the
/// guess is full, `append` returns it unchanged rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pegs: Sequence<Peg>,
    required_length: usize,
}

impl Guess {
    /// Creates an empty guess bounded by `required_length`.
    pub fn empty(required_length: usize) -> Self {
        Self {
            pegs: Sequence::new(),
            required_length,
        }
    }

    /// Adds a peg if the guess is not yet full; no-op otherwise.
    pub fn append(self, peg: Peg) -> Self {
        if self.pegs.len() < self.required_length {
            Self {
                pegs: self.pegs.push_front(peg),
                required_length: self.required_length,
            }
        } else {
            self
        }
    }

    /// Removes the most recently added peg; no-op when empty.
    pub fn remove_last(self) -> Self {
        if self.pegs.is_empty() {
            self
        } else {
            Self {
                pegs: self.pegs.remove_at(0),
                required_length: self.required_length,
            }
        }
    }

    /// Returns true when the guess has reached the required length.
    pub fn is_complete(&self) -> bool {
        self.pegs.len() == self.required_length
    }

    /// Returns the number of pegs entered so far.
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// Returns true if no pegs have been entered.
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Returns the pegs, most recently added first.
    pub fn pegs(&self) -> &Sequence<Peg> {
        &self.pegs
    }

    /// Returns the length this guess must reach to be submittable.
    pub fn required_length(&self) -> usize {
        self.required_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_grows_guess() {
        let guess = Guess::empty(4).append(Peg::Red).append(Peg::Green);
        assert_eq!(guess.len(), 2);
        assert!(!guess.is_complete());
    }

    #[test]
    fn test_most_recent_peg_is_at_head() {
        let guess = Guess::empty(4).append(Peg::Red).append(Peg::Green);
        assert_eq!(guess.pegs().get(0), Ok(&Peg::Green));
        assert_eq!(guess.pegs().get(1), Ok(&Peg::Red));
    }

    #[test]
    fn test_append_past_capacity_is_noop() {
        let mut guess = Guess::empty(2);
        for _ in 0..10 {
            guess = guess.append(Peg::Blue);
        }
        assert_eq!(guess.len(), 2);
        assert!(guess.is_complete());
    }

    #[test]
    fn test_remove_last_drops_most_recent() {
        let guess = Guess::empty(4)
            .append(Peg::Red)
            .append(Peg::Green)
            .remove_last();
        assert_eq!(guess.len(), 1);
        assert_eq!(guess.pegs().get(0), Ok(&Peg::Red));
    }

    #[test]
    fn test_remove_last_on_empty_is_noop() {
        let guess = Guess::empty(4).remove_last();
        assert!(guess.is_empty());
    }

    #[test]
    fn test_is_complete_at_required_length() {
        let guess = Guess::empty(1).append(Peg::Yellow);
        assert!(guess.is_complete());
    }
}
