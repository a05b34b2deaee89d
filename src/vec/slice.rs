// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, vec::GrowVec};

impl<T, A: RawAlloc> GrowVec<T, A> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, `[0, len)` is live and the pointer is non-null and
        // aligned (dangling when there is no block, which is fine for `len == 0`).
        unsafe { core::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above; `&mut self` makes the view exclusive.
        unsafe { core::slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }
}
