// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::RawAlloc,
    error::{handle_alloc_failure, Error},
    lifecycle,
    vec::GrowVec,
};

impl<T: Clone, A: RawAlloc + Clone> GrowVec<T, A> {
    /// Clones into an independent block from a clone of the allocator.
    ///
    /// The copy has `capacity_for(len)` slots (none when empty). If an
    /// element's `Clone` panics, the clones made so far are destroyed and the
    /// new block is released.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let alloc = self.allocator().clone();
        if self.len == 0 {
            return Ok(Self::new_in(alloc));
        }
        let mut out = Self::with_capacity_in(self.len, alloc)?;
        // SAFETY: `out` has at least `len` raw slots in its own block.
        unsafe { lifecycle::construct_clone(self.as_slice(), out.buf.ptr()) };
        out.len = self.len;
        Ok(out)
    }
}

impl<T: Clone, A: RawAlloc + Clone> Clone for GrowVec<T, A> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(v) => v,
            Err(err) => handle_alloc_failure(err),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_from_slice(source.as_slice()) {
            handle_alloc_failure(err);
        }
    }
}
