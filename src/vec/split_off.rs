// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::Error, lifecycle, vec::GrowVec};

impl<T, A: RawAlloc + Clone> GrowVec<T, A> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)` and keeps its capacity,
    /// - the returned vector contains the tail `[at..len)` in a block from a
    ///   clone of this vector's allocator.
    ///
    /// Returns [`Error::OutOfRange`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        if at > len {
            return Err(Error::OutOfRange { index: at, len });
        }
        let tail = len - at;
        let alloc = self.allocator().clone();
        if tail == 0 {
            return Ok(Self::new_in(alloc));
        }

        let mut other = Self::with_capacity_in(tail, alloc)?;
        // SAFETY: `[at, len)` is live, `other` has `tail` raw slots, and the
        // two blocks are distinct.
        unsafe { lifecycle::relocate(self.buf.ptr().add(at), other.buf.ptr(), tail) };
        self.len = at;
        other.len = tail;
        Ok(other)
    }
}
