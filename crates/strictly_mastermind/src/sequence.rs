//! Persistent sequence of values.
//!
//! `Sequence` is an immutable cons list: every "mutating" operation returns
//! a new sequence and leaves the original untouched. Tails are shared
//! through `Rc`, which is safe because nodes are never mutated after
//! construction. Operations are O(n), an accepted cost at the single-digit
//! lengths this engine works with.

use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// An immutable, order-preserving sequence of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sequence<T> {
    /// The empty sequence.
    Empty,
    /// A head value followed by the rest of the sequence.
    Node {
        /// First element.
        head: T,
        /// Remaining elements, shared with any sequence derived from this one.
        tail: Rc<Sequence<T>>,
    },
}

/// Error raised by element access on a [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SequenceError {
    /// Requested index lies past the end of the sequence.
    #[display("Index {} out of range for sequence of length {}", index, len)]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The sequence length at the time of access.
        len: usize,
    },
}

impl std::error::Error for SequenceError {}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Sequence::Empty
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        matches!(self, Sequence::Empty)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] when `index` lies past the end.
    /// Access past the end is always a defined error, never a silent default.
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.iter().nth(index).ok_or(SequenceError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Prepends `value`, consuming the sequence.
    ///
    /// The previous sequence becomes the tail of the new node, so building
    /// front-to-back is O(1) per element.
    pub fn push_front(self, value: T) -> Self {
        Sequence::Node {
            head: value,
            tail: Rc::new(self),
        }
    }

    /// Returns the first index whose element equals `value`, or `None`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    /// Returns true if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { current: self }
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a new sequence with the element at `index` removed.
    ///
    /// Relative order of the remaining elements is preserved. Removal is
    /// total by policy: past the empty base case the sequence is returned
    /// unchanged, matching the guess builder's defensive use. Index bounds
    /// are the caller's responsibility elsewhere.
    pub fn remove_at(&self, index: usize) -> Self {
        match self {
            Sequence::Empty => Sequence::Empty,
            Sequence::Node { head, tail } => {
                if index == 0 {
                    (**tail).clone()
                } else {
                    Sequence::Node {
                        head: head.clone(),
                        tail: Rc::new(tail.remove_at(index - 1)),
                    }
                }
            }
        }
    }

    /// Returns a new sequence with its final element dropped.
    ///
    /// The empty sequence is returned unchanged.
    pub fn remove_last(&self) -> Self {
        match self {
            Sequence::Empty => Sequence::Empty,
            Sequence::Node { head, tail } => {
                if tail.is_empty() {
                    Sequence::Empty
                } else {
                    Sequence::Node {
                        head: head.clone(),
                        tail: Rc::new(tail.remove_last()),
                    }
                }
            }
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Sequence::Empty, |acc, item| acc.push_front(item))
    }
}

/// Borrowing iterator over a [`Sequence`], front to back.
#[derive(Debug)]
pub struct Iter<'a, T> {
    current: &'a Sequence<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self.current {
            Sequence::Empty => None,
            Sequence::Node { head, tail } => {
                self.current = tail;
                Some(head)
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: &[u8]) -> Sequence<u8> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_empty_has_length_zero() {
        assert_eq!(Sequence::<u8>::new().len(), 0);
        assert!(Sequence::<u8>::new().is_empty());
    }

    #[test]
    fn test_from_iter_preserves_order() {
        let s = seq(&[1, 2, 3]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_get_in_range() {
        let s = seq(&[10, 20, 30]);
        assert_eq!(s.get(0), Ok(&10));
        assert_eq!(s.get(2), Ok(&30));
    }

    #[test]
    fn test_get_out_of_range_is_error() {
        let s = seq(&[10]);
        assert_eq!(s.get(1), Err(SequenceError::OutOfRange { index: 1, len: 1 }));
        assert_eq!(
            Sequence::<u8>::new().get(0),
            Err(SequenceError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_push_front() {
        let s = seq(&[2, 3]).push_front(1);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_at_head_shares_tail() {
        let s = seq(&[1, 2, 3]);
        let removed = s.remove_at(0);
        assert_eq!(removed.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
        // Original is untouched.
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_at_middle_preserves_order() {
        let s = seq(&[1, 2, 3, 4]);
        assert_eq!(
            s.remove_at(2).iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 4]
        );
    }

    #[test]
    fn test_remove_at_on_empty_returns_empty() {
        assert_eq!(Sequence::<u8>::new().remove_at(0), Sequence::Empty);
    }

    #[test]
    fn test_remove_at_past_end_returns_sequence_unchanged() {
        let s = seq(&[1, 2]);
        assert_eq!(s.remove_at(9), s);
    }

    #[test]
    fn test_remove_last() {
        let s = seq(&[1, 2, 3]);
        assert_eq!(
            s.remove_last().iter().copied().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(Sequence::<u8>::new().remove_last(), Sequence::Empty);
        assert_eq!(seq(&[7]).remove_last(), Sequence::Empty);
    }

    #[test]
    fn test_index_of_first_occurrence() {
        let s = seq(&[5, 7, 5]);
        assert_eq!(s.index_of(&5), Some(0));
        assert_eq!(s.index_of(&7), Some(1));
        assert_eq!(s.index_of(&9), None);
    }

    #[test]
    fn test_contains() {
        let s = seq(&[1, 2]);
        assert!(s.contains(&2));
        assert!(!s.contains(&3));
    }

    #[test]
    fn test_display() {
        assert_eq!(seq(&[1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(Sequence::<u8>::new().to_string(), "[]");
    }
}
