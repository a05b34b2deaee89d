// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::{Heap, RawAlloc},
    error::{handle_alloc_failure, Error},
    lifecycle,
    vec::GrowVec,
};

// Core imports
use core::mem::ManuallyDrop;

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    /// Moves the array's elements into a fresh block of `capacity_for(N)` slots.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    fn from(src: [T; N]) -> Self {
        if N == 0 {
            return Self::new();
        }
        let mut v = match Self::with_capacity_in(N, Heap) {
            Ok(v) => v,
            Err(err) => handle_alloc_failure(err),
        };
        let src = ManuallyDrop::new(src);
        // SAFETY: the block has at least `N` raw slots, and `src` will never
        // drop its now-moved elements.
        unsafe { lifecycle::relocate(src.as_ptr(), v.buf.ptr(), N) };
        v.len = N;
        v
    }
}

impl<T: Clone, A: RawAlloc + Default> TryFrom<&[T]> for GrowVec<T, A> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::default();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}
