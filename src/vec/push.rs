// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::Error, vec::GrowVec};

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Appends `value`, growing to the next power of two when full.
    ///
    /// On error the vector is unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len < self.capacity() {
            // SAFETY: `len < capacity`, so the slot is raw and in bounds.
            unsafe { self.buf.ptr().add(self.len).write(value) };
            self.len += 1;
            return Ok(());
        }
        self.insert(self.len, value).map(drop)
    }

    /// Appends the value produced by `make` and returns a reference to it.
    ///
    /// `make` runs only once room has been made.
    pub fn emplace_back<F>(&mut self, make: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        let index = self.emplace(self.len, make)?;
        // SAFETY: `emplace` just constructed the slot at `index < len`.
        Ok(unsafe { &mut *self.buf.ptr().add(index) })
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{error::Error, testing::Budget, GrowVec};

    #[test]
    fn test_push_in_order() {
        let mut v: GrowVec<i32> = GrowVec::new();
        for i in 1..=5 {
            v.push(i).unwrap();
        }
        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_push_capacity_sequence() {
        let mut v: GrowVec<u8> = GrowVec::new();
        let caps: Vec<usize> = (0..9)
            .map(|i| {
                v.push(i).unwrap();
                v.capacity()
            })
            .collect();
        assert_eq!(caps, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn test_push_failure_is_noop() {
        let budget = Budget::new(1);
        let mut v = GrowVec::new_in(&budget);
        v.push(1u32).unwrap();
        assert!(matches!(v.push(2), Err(Error::AllocFailed { size: 8, align: 4 })));
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn test_emplace_back_returns_new_element() {
        let mut v = crate::grow_vec![1];
        *v.emplace_back(|| 2).unwrap() += 10;
        assert_eq!(v, [1, 12]);
    }
}
