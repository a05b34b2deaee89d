// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::Error, vec::GrowVec};

impl<T, A: RawAlloc + Default> GrowVec<T, A> {
    /// Tries to construct from an iterator, stopping at the first allocation
    /// failure.
    ///
    /// Semantics:
    /// - Elements are pushed in iterator order.
    /// - The lower bound of the iterator's size hint is reserved up front.
    /// - On error, the elements pushed so far are destroyed; the returned
    ///   `Err` does *not* include the partially filled vector.
    /// - The source iterator may be left partially consumed.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let iter = iter.into_iter();
        let mut v = Self::default();
        v.reserve(iter.size_hint().0)?;
        for item in iter {
            v.push(item)?;
        }
        Ok(v)
    }
}
