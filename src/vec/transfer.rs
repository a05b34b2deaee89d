// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ownership transfer between vectors.
//!
//! A plain Rust move already hands the block over. These two cover the cases
//! where the source stays behind as a usable, empty vector.

// Crate imports
use crate::{allocator::RawAlloc, error::Error, lifecycle, vec::GrowVec};

// Core imports
use core::mem;

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Moves the contents out, leaving `self` empty with capacity 0.
    ///
    /// # Examples
    /// ```
    /// # use grow_vec::grow_vec;
    /// let mut a = grow_vec![1, 2, 3];
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 0);
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let empty = Self::new_in(self.allocator().clone());
        mem::replace(self, empty)
    }

    /// Replaces the contents of `self` with those of `source`, leaving
    /// `source` empty with capacity 0.
    ///
    /// If the two allocators compare equal, `source`'s block is adopted as is.
    /// Otherwise the elements are relocated into a block from `self`'s
    /// allocator, and `source`'s block is released. Room is made before
    /// anything is destroyed, so on error both vectors are unchanged.
    pub fn move_from(&mut self, source: &mut Self) -> Result<(), Error>
    where
        A: PartialEq,
    {
        if self.allocator() == source.allocator() {
            self.clear();
            // SAFETY: `self` is empty, so its block may be released, and equal
            // allocators can release each other's blocks.
            unsafe {
                self.buf.free();
                self.buf.swap_block(&mut source.buf);
            }
            self.len = mem::replace(&mut source.len, 0);
            return Ok(());
        }

        let n = source.len;
        self.reserve(n)?;
        self.clear();
        // SAFETY: `self` is empty with at least `n` raw slots in a block that
        // is distinct from `source`'s. Afterwards every slot of `source` is raw.
        unsafe {
            lifecycle::relocate(source.buf.ptr(), self.buf.ptr(), n);
            source.len = 0;
            source.buf.free();
        }
        self.len = n;
        Ok(())
    }
}
