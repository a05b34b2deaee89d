// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::RawAlloc,
    error::{handle_alloc_failure, Error},
    vec::GrowVec,
};

impl<T, A: RawAlloc> Extend<T> for GrowVec<T, A> {
    /// Appends every item of `iter`.
    ///
    /// # Panics
    ///
    /// Panics if an allocation fails; the items appended so far are kept.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(err) = self.reserve_additional(lower) {
            handle_alloc_failure(err);
        }
        for item in iter {
            if let Err(err) = self.push(item) {
                handle_alloc_failure(err);
            }
        }
    }
}

impl<'a, T: Copy + 'a, A: RawAlloc> Extend<&'a T> for GrowVec<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Appends clones of `src`. On error the vector is unchanged.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.insert_from_slice(self.len, src).map(drop)
    }

    /// Appends every item of `iter`, all or nothing.
    ///
    /// If an allocation fails, the items appended so far are destroyed and
    /// the error is returned with the vector unchanged, block and capacity
    /// included. The source iterator may be left partially consumed. See
    /// [`insert_iter`](GrowVec::insert_iter) for how the items are staged.
    #[inline]
    pub fn try_extend_from_iter<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        A: Clone,
    {
        self.insert_iter(self.len, iter).map(drop)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{testing::Budget, GrowVec};

    #[test]
    fn test_extend_from_slice() {
        let mut v: GrowVec<u8> = GrowVec::new();
        assert_eq!(v.extend_from_slice(&[1, 2, 3]), Ok(()));
        assert_eq!(v.extend_from_slice(&[]), Ok(()));
        assert_eq!(v.extend_from_slice(&[4, 5]), Ok(()));
        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_extend_reserves_from_size_hint() {
        let mut v: GrowVec<u32> = GrowVec::new();
        v.extend(0..100);
        assert_eq!(v.len(), 100);
        assert_eq!(v.capacity(), 128);
        v.extend(&[100, 101]);
        assert_eq!(v.last(), Some(&101));
    }

    #[test]
    #[should_panic(expected = "grow-vec: allocation of")]
    fn test_extend_panics_on_allocation_failure() {
        let budget = Budget::new(1);
        let mut v = GrowVec::new_in(&budget);
        v.extend([1, 2]);
        v.extend([3]);
    }

    #[test]
    fn test_try_extend_from_iter_is_all_or_nothing() {
        let budget = Budget::new(2);
        let mut v = GrowVec::new_in(&budget);
        v.extend_from_slice(&[1, 2]).unwrap();
        let before = v.as_ptr();

        // The first staged item gets a block; growing that block is refused.
        let err = v.try_extend_from_iter((3..6).filter(|_| true)).unwrap_err();
        assert!(err.is_alloc());
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_ptr(), before);
        assert_eq!(budget.outstanding(), 1);

        budget.refill(2);
        v.try_extend_from_iter(3..6).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(v.capacity(), 8);
        assert_eq!(budget.outstanding(), 1);
    }
}
