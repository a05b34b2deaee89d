// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sequence algorithms over two iterables.
//!
//! These back the comparison impls of [`GrowVec`](crate::GrowVec) but work on
//! any pair of iterators, so they can compare a vector against arrays, slices,
//! or other containers without going through a slice first.

// Core imports
use core::cmp::Ordering;

/// Returns `true` if both sequences have the same length and are pairwise equal.
///
/// # Examples
/// ```
/// use grow_vec::algo::elements_equal;
/// assert!(elements_equal(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!elements_equal(&[1, 2], &[1, 2, 3]));
/// ```
pub fn elements_equal<I, J>(a: I, b: J) -> bool
where
    I: IntoIterator,
    J: IntoIterator,
    I::Item: PartialEq<J::Item>,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) => {
                if x != y {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Lexicographic total order: the first unequal pair decides, and a proper
/// prefix orders before the longer sequence.
pub fn lexicographic_cmp<I, J, T>(a: I, b: J) -> Ordering
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    T: Ord,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Equal => {}
                non_eq => return non_eq,
            },
        }
    }
}

/// Lexicographic partial order; `None` as soon as a pair is incomparable.
pub fn lexicographic_partial_cmp<I, J>(a: I, b: J) -> Option<Ordering>
where
    I: IntoIterator,
    J: IntoIterator,
    I::Item: PartialOrd<J::Item>,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Some(Ordering::Equal),
            (None, Some(_)) => return Some(Ordering::Less),
            (Some(_), None) => return Some(Ordering::Greater),
            (Some(x), Some(y)) => match x.partial_cmp(&y)? {
                Ordering::Equal => {}
                non_eq => return Some(non_eq),
            },
        }
    }
}

/// `true` if `a` orders strictly before `b`.
///
/// # Examples
/// ```
/// use grow_vec::algo::lexicographic_less;
/// assert!(lexicographic_less(&[1, 2], &[1, 2, 0]));
/// assert!(lexicographic_less(&[1, 2, 3], &[1, 3]));
/// assert!(!lexicographic_less(&[1, 2], &[1, 2]));
/// ```
pub fn lexicographic_less<I, J>(a: I, b: J) -> bool
where
    I: IntoIterator,
    J: IntoIterator,
    I::Item: PartialOrd<J::Item>,
{
    lexicographic_partial_cmp(a, b) == Some(Ordering::Less)
}
