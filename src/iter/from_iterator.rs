// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::handle_alloc_failure, vec::GrowVec};

impl<T, A: RawAlloc + Default> FromIterator<T> for GrowVec<T, A> {
    /// Collects every item, reserving the iterator's lower size bound first.
    ///
    /// Panics if an allocation fails; use
    /// [`GrowVec::try_from_iter`] to get the error instead.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        match Self::try_from_iter(iter) {
            Ok(v) => v,
            Err(err) => handle_alloc_failure(err),
        }
    }
}
