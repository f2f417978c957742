//! Guess scoring: exact and inexact match counting.
//!
//! The subtlety is duplicate pegs. A peg that matched exactly at one
//! position must not be re-counted as an inexact match through a duplicate
//! occurrence elsewhere, and a secret peg consumed by one inexact claim must
//! not satisfy a second. Exact matches are therefore removed from both sides
//! first, and inexact counting consumes one secret occurrence per match.

use super::Feedback;
use crate::sequence::Sequence;
use crate::types::Peg;
use tracing::instrument;

/// Counts positions where `secret` and `guess` hold the same peg.
#[instrument(skip(secret, guess))]
pub fn exact_matches(secret: &Sequence<Peg>, guess: &Sequence<Peg>) -> usize {
    secret
        .iter()
        .zip(guess.iter())
        .filter(|(s, g)| s == g)
        .count()
}

/// Returns the pegs of `keep` at positions where `keep` and `other` differ.
///
/// Relative order of the survivors is preserved. Applying this to both
/// sides of a guess yields the residual multisets that inexact counting
/// works over.
#[instrument(skip(keep, other))]
pub fn remove_exact_matches(keep: &Sequence<Peg>, other: &Sequence<Peg>) -> Sequence<Peg> {
    keep.iter()
        .zip(other.iter())
        .filter(|(k, o)| k != o)
        .map(|(k, _)| *k)
        .collect()
}

/// Counts right-peg, wrong-position matches between the residuals.
///
/// Walks the guess residual in order; each peg found in the secret residual
/// counts once and consumes the first occurrence by position, enforcing a
/// one-to-one matching between guess and secret pegs.
#[instrument(skip(secret_residual, guess_residual))]
pub fn inexact_matches(secret_residual: &Sequence<Peg>, guess_residual: &Sequence<Peg>) -> usize {
    let mut secret = secret_residual.clone();
    let mut count = 0;
    for peg in guess_residual.iter() {
        if let Some(index) = secret.index_of(peg) {
            count += 1;
            secret = secret.remove_at(index);
        }
    }
    count
}

/// Scores `guess` against `secret`, both of the same length.
#[instrument(skip(secret, guess))]
pub fn score(secret: &Sequence<Peg>, guess: &Sequence<Peg>) -> Feedback {
    let exact = exact_matches(secret, guess);
    let secret_residual = remove_exact_matches(secret, guess);
    let guess_residual = remove_exact_matches(guess, secret);
    Feedback::new(exact, inexact_matches(&secret_residual, &guess_residual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Peg::{Blue, Green, Red, Yellow};

    fn seq(pegs: &[Peg]) -> Sequence<Peg> {
        pegs.iter().copied().collect()
    }

    #[test]
    fn test_identical_sequences_all_exact() {
        let code = seq(&[Red, Green, Blue, Yellow]);
        assert_eq!(score(&code, &code), Feedback::new(4, 0));
    }

    #[test]
    fn test_disjoint_sequences_no_matches() {
        let secret = seq(&[Red, Red, Red, Red]);
        let guess = seq(&[Blue, Blue, Blue, Blue]);
        assert_eq!(score(&secret, &guess), Feedback::new(0, 0));
    }

    #[test]
    fn test_full_scramble_all_inexact() {
        let secret = seq(&[Red, Blue, Green, Yellow]);
        let guess = seq(&[Green, Yellow, Red, Blue]);
        assert_eq!(score(&secret, &guess), Feedback::new(0, 4));
    }

    #[test]
    fn test_mixed_exact_and_inexact() {
        let secret = seq(&[Red, Green, Blue, Yellow]);
        let guess = seq(&[Red, Blue, Green, Yellow]);
        assert_eq!(score(&secret, &guess), Feedback::new(2, 2));
    }

    #[test]
    fn test_duplicates_in_guess_do_not_overcount() {
        // Only two reds exist in the secret; the extra guessed reds must
        // neither score exact nor inexact.
        let secret = seq(&[Red, Red, Blue, Yellow]);
        let guess = seq(&[Red, Red, Red, Red]);
        assert_eq!(score(&secret, &guess), Feedback::new(2, 0));
    }

    #[test]
    fn test_exact_match_not_reused_as_inexact() {
        // The guessed red at position 0 matches exactly; the guessed red at
        // position 3 finds the remaining secret red at position 1.
        let secret = seq(&[Red, Red, Green, Green]);
        let guess = seq(&[Red, Blue, Blue, Red]);
        assert_eq!(score(&secret, &guess), Feedback::new(1, 1));
    }

    #[test]
    fn test_all_duplicate_code_guessed_exactly() {
        let secret = seq(&[Green, Green, Green, Green]);
        assert_eq!(score(&secret, &secret), Feedback::new(4, 0));
    }

    #[test]
    fn test_residual_preserves_order() {
        let secret = seq(&[Red, Green, Blue, Yellow]);
        let guess = seq(&[Red, Blue, Blue, Yellow]);
        let residual = remove_exact_matches(&secret, &guess);
        assert_eq!(residual, seq(&[Green, Blue]));
    }

    #[test]
    fn test_inexact_consumes_first_occurrence() {
        let secret_residual = seq(&[Red, Red, Green]);
        let guess_residual = seq(&[Red, Red, Red]);
        assert_eq!(inexact_matches(&secret_residual, &guess_residual), 2);
    }

    #[test]
    fn test_counts_bounded_by_length() {
        let secret = seq(&[Red, Green, Blue, Yellow]);
        let guess = seq(&[Yellow, Red, Green, Blue]);
        let feedback = score(&secret, &guess);
        assert!(feedback.exact() + feedback.inexact() <= 4);
    }

    #[test]
    fn test_is_winning() {
        assert!(Feedback::new(4, 0).is_winning(4));
        assert!(!Feedback::new(3, 1).is_winning(4));
    }

    #[test]
    fn test_feedback_display() {
        assert_eq!(Feedback::new(2, 1).to_string(), "Exact: 2 | Inexact: 1");
    }
}
