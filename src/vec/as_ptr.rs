// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, vec::GrowVec};

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Returns a raw pointer to the start of the block.
    ///
    /// Only the first `len` slots hold live values. The pointer is dangling
    /// (but aligned) while the vector holds no block, and it is invalidated by
    /// any operation that reallocates.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Returns a mutable raw pointer to the start of the block.
    ///
    /// Writes through it beyond `len` do **not** update `len` and are not part
    /// of the vector's logical contents.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }
}
