// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::{Heap, RawAlloc},
    error::Error,
    lifecycle,
    raw::{capacity_for, RawBuf},
    vec::GrowVec,
};

impl<T> GrowVec<T> {
    /// Constructs an empty vector on the global heap. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Heap)
    }

    /// Constructs an empty vector with room for at least `n` elements.
    ///
    /// The block holds `capacity_for(n)` slots: the smallest power of two
    /// `>= n` (so at least one).
    #[inline]
    pub fn with_capacity(n: usize) -> Result<Self, Error> {
        Self::with_capacity_in(n, Heap)
    }

    /// Constructs a vector of `count` clones of `value`.
    #[inline]
    pub fn from_elem(count: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::from_elem_in(count, value, Heap)
    }
}

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Constructs an empty vector drawing from `alloc`. Does not allocate.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    /// Like [`with_capacity`](GrowVec::with_capacity), drawing from `alloc`.
    pub fn with_capacity_in(n: usize, alloc: A) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::with_capacity_in(capacity_for(n)?, alloc)?,
            len: 0,
        })
    }

    /// Like [`from_elem`](GrowVec::from_elem), drawing from `alloc`.
    pub fn from_elem_in(count: usize, value: T, alloc: A) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut v = Self::with_capacity_in(count, alloc)?;
        // SAFETY: the fresh block has at least `count` raw slots.
        unsafe { lifecycle::construct_fill(v.buf.ptr(), count, value) };
        v.len = count;
        Ok(v)
    }
}

impl<T, A: RawAlloc + Default> Default for GrowVec<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}
