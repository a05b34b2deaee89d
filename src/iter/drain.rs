// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::{Heap, RawAlloc},
    lifecycle::{self, CloseGap},
    vec::{resolve_range, GrowVec},
};

// Core imports
use core::{fmt, iter::FusedIterator, ops::RangeBounds};

/// Iterator returned by [`GrowVec::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - Yields the drained elements by value, straight out of the parent's block.
/// - On drop, destroys whatever was not yielded and shifts the tail left.
///
/// While it is alive the parent's `len` only covers the prefix before the
/// range, so leaking a `Drain` (e.g. with `mem::forget`) leaks the range and
/// the tail but never exposes a moved-out slot.
pub struct Drain<'a, T, A: RawAlloc = Heap> {
    vec: &'a mut GrowVec<T, A>,
    /// Start of the drained range.
    start: usize,
    /// End of the drained range (start of the kept tail).
    end: usize,
    /// Length of the kept tail.
    tail: usize,
    /// Unyielded elements are `[front, back)`.
    front: usize,
    back: usize,
}

impl<T, A: RawAlloc> Drain<'_, T, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is live.
        unsafe {
            core::slice::from_raw_parts(self.vec.buf.ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T, A: RawAlloc> Iterator for Drain<'_, T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and is no longer counted as unyielded.
            Some(unsafe { self.vec.buf.ptr().add(i).read() })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, A: RawAlloc> DoubleEndedIterator for Drain<'_, T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: as in `next`.
            Some(unsafe { self.vec.buf.ptr().add(self.back).read() })
        } else {
            None
        }
    }
}
impl<T, A: RawAlloc> ExactSizeIterator for Drain<'_, T, A> {}
impl<T, A: RawAlloc> FusedIterator for Drain<'_, T, A> {}

impl<T, A: RawAlloc> Drop for Drain<'_, T, A> {
    fn drop(&mut self) {
        let base = self.vec.buf.ptr();
        let (front, back) = (self.front, self.back);
        self.front = self.back;
        // SAFETY: `[start, end)` is raw except for the unyielded `[front, back)`,
        // which is destroyed while the guard is armed; the guard then closes
        // the gap and restores `len`.
        unsafe {
            let _gap = CloseGap {
                base,
                index: self.start,
                count: self.end - self.start,
                tail: self.tail,
                len: &mut self.vec.len,
            };
            lifecycle::destroy_range(base.add(front), back - front);
        }
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for Drain<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.as_slice()).finish()
    }
}

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Removes the specified range and returns its elements as an iterator.
    ///
    /// The range is removed even if the iterator is not fully consumed: when
    /// the `Drain` is dropped, the remaining elements are destroyed and the
    /// tail is shifted left. Capacity is kept.
    ///
    /// # Panics
    ///
    /// Panics if the specified range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// (A range with `start == end` yields an empty iterator and leaves
    /// the vector unchanged.)
    ///
    /// # Examples
    /// ```
    /// # use grow_vec::{grow_vec, GrowVec};
    /// let mut v = grow_vec![1, 2, 3, 4];
    /// let drained: GrowVec<_> = v.drain(1..3).collect();
    /// assert_eq!(drained, [2, 3]);
    /// assert_eq!(v, [1, 4]);
    /// ```
    #[track_caller]
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, A>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        let (start, end) = resolve_range(range, len);
        self.len = start;
        Drain {
            vec: self,
            start,
            end,
            tail: len - end,
            front: start,
            back: end,
        }
    }
}
