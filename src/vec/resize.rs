// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::Error, lifecycle, vec::GrowVec};

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// Shrinking destroys the excess back to front. Capacity never shrinks.
    /// On error, or if a clone panics, the vector keeps its old contents.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.reserve(new_len)?;
        let len = self.len;
        // SAFETY: `reserve` made `[len, new_len)` available and raw.
        unsafe { lifecycle::construct_fill(self.buf.ptr().add(len), new_len - len, value) };
        self.len = new_len;
        Ok(())
    }

    /// Resizes to `new_len`, producing new elements with `f` when growing.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.reserve(new_len)?;
        let len = self.len;
        // SAFETY: as in `resize`.
        unsafe { lifecycle::construct_with(self.buf.ptr().add(len), new_len - len, f) };
        self.len = new_len;
        Ok(())
    }

    /// Resizes to `new_len`, filling with `T::default()` when growing.
    #[inline]
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }
}
