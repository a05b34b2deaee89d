// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::RawAlloc,
    error::Error,
    lifecycle::{self, CloseGap},
    vec::{resolve_range, GrowVec},
};

// Core imports
use core::ops::RangeBounds;

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Destroys the elements in `range` and shifts the tail left over them.
    ///
    /// Returns the index of the first element after the erased run, which is
    /// `range.start`. Capacity is kept.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len()`.
    ///
    /// # Examples
    /// ```
    /// # use grow_vec::grow_vec;
    /// let mut v = grow_vec![1, 2, 3, 4, 5];
    /// assert_eq!(v.erase(1..3), 1);
    /// assert_eq!(v, [1, 4, 5]);
    /// ```
    #[track_caller]
    pub fn erase<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        let len = self.len;
        let (start, end) = resolve_range(range, len);
        if start == end {
            return start;
        }
        let base = self.buf.ptr();
        // SAFETY: `[start, end)` is live. The guard closes the gap (and fixes
        // `len`) even if a destructor unwinds.
        unsafe {
            let _gap = CloseGap {
                base,
                index: start,
                count: end - start,
                tail: len - end,
                len: &mut self.len,
            };
            lifecycle::destroy_range(base.add(start), end - start);
        }
        start
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }
        let base = self.buf.ptr();
        // SAFETY: `index < len`; after the read the slot is raw and the tail
        // is shifted over it.
        unsafe {
            let out = base.add(index).read();
            lifecycle::shift(base.add(index + 1), base.add(index), len - index - 1);
            self.len = len - 1;
            Some(out)
        }
    }

    /// Fallible variant of [`remove`](GrowVec::remove), returning
    /// [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        self.remove(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Removes and returns the element at `index`, moving the last element
    /// into its place.
    ///
    /// Does not preserve order. Returns `None` if `index >= len`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.len -= 1;
        let last = self.len;
        let base = self.buf.ptr();
        // SAFETY: both slots were live; `last` is now outside `len`, and its
        // value moves into the hole left at `index`.
        unsafe {
            let out = base.add(index).read();
            if index != last {
                lifecycle::relocate(base.add(last), base.add(index), 1);
            }
            Some(out)
        }
    }

    /// Fallible variant of [`swap_remove`](GrowVec::swap_remove), returning
    /// [`Error::OutOfRange`] when `index >= len`.
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        self.swap_remove(index).ok_or(Error::OutOfRange { index, len })
    }
}
