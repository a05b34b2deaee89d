// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, vec::GrowVec};

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Moves the last element out, if any. Capacity is kept.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: the old last slot was live and is now outside `len`, so
            // reading it out leaves it raw.
            Some(unsafe { self.buf.ptr().add(self.len).read() })
        }
    }
}
