// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowVec`](crate::GrowVec).
//!
//! `Index` and `IndexMut` accept anything a slice accepts (`usize` and every
//! range form) and mirror slice behavior:
//! - panics on out-of-bounds or inverted ranges;
//! - views are restricted to the live prefix `[0..len)`.
//!
//! [`GrowVec::at`](crate::GrowVec::at) is the checked alternative.

// Crate imports
use crate::{allocator::RawAlloc, vec::GrowVec};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, A: RawAlloc> Index<I> for GrowVec<T, A> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, A: RawAlloc> IndexMut<I> for GrowVec<T, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
