// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::Error, lifecycle, vec::GrowVec};

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Replaces the contents with `count` clones of `value`, reusing the block
    /// when it is large enough.
    ///
    /// Room is made before anything is destroyed, so an allocation error
    /// leaves the vector unchanged. If a clone panics, the vector is left
    /// empty.
    pub fn assign(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.reserve(count)?;
        self.clear();
        // SAFETY: the vector is empty and has at least `count` raw slots.
        unsafe { lifecycle::construct_fill(self.buf.ptr(), count, value) };
        self.len = count;
        Ok(())
    }

    /// Replaces the contents with clones of `src`.
    ///
    /// Same guarantees as [`assign`](GrowVec::assign).
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.reserve(src.len())?;
        self.clear();
        // SAFETY: as in `assign`; `src` cannot alias `self`.
        unsafe { lifecycle::construct_clone(src, self.buf.ptr()) };
        self.len = src.len();
        Ok(())
    }

    /// Replaces the contents with the items of `iter`.
    ///
    /// The new items are appended behind the old ones first, so both an
    /// allocation error and a panicking iterator leave the old contents in
    /// place.
    pub fn assign_iter<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        A: Clone,
    {
        let old = self.len;
        self.try_extend_from_iter(iter)?;
        self.erase(..old);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        testing::{Budget, Ledger},
        GrowVec,
    };
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_assign_reuses_block() {
        let mut v = crate::grow_vec![1, 2, 3, 4];
        let before = v.as_ptr();
        v.assign(2, 7).unwrap();
        assert_eq!(v, [7, 7]);
        assert_eq!(v.as_ptr(), before);
        assert_eq!(v.capacity(), 4);

        v.assign(0, 1).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_assign_grows() {
        let mut v = crate::grow_vec![1];
        v.assign_from_slice(&[4, 5, 6]).unwrap();
        assert_eq!(v, [4, 5, 6]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_assign_allocation_failure_keeps_contents() {
        let budget = Budget::new(1);
        let mut v = GrowVec::new_in(&budget);
        v.push(1).unwrap();
        assert!(v.assign(3, 0).unwrap_err().is_alloc());
        assert!(v.assign_from_slice(&[4, 5]).unwrap_err().is_alloc());
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn test_assign_panicking_clone_leaves_vector_empty() {
        let ledger = Ledger::new();
        let mut v: GrowVec<_> = (0..2).map(|i| ledger.make(i)).collect();
        let src = [ledger.make(7), ledger.make(8)];
        ledger.panic_after_clones(1);
        let res = catch_unwind(AssertUnwindSafe(|| v.assign_from_slice(&src)));
        assert!(res.is_err());
        assert!(v.is_empty());
        assert_eq!(ledger.live(), 2);
    }

    #[test]
    fn test_assign_iter_replaces_contents() {
        let mut v = crate::grow_vec![1, 2, 3];
        v.assign_iter([9, 8]).unwrap();
        assert_eq!(v, [9, 8]);
        v.assign_iter(core::iter::empty()).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_assign_iter_failure_keeps_contents() {
        let budget = Budget::new(1);
        let mut v = GrowVec::new_in(&budget);
        v.extend_from_slice(&[1, 2]).unwrap();
        let before = v.as_ptr();
        assert!(v.assign_iter([3, 4, 5]).is_err());
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_ptr(), before);
    }
}
