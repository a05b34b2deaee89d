// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::RawAlloc,
    error::Error,
    lifecycle,
    raw::capacity_for,
    vec::GrowVec,
};

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Ensures room for at least `n` elements in total.
    ///
    /// If `n > capacity`, moves to a block of `capacity_for(n)` slots;
    /// otherwise does nothing. Values and their positions are unchanged. On
    /// error the vector is untouched.
    ///
    /// # Examples
    /// ```
    /// # use grow_vec::GrowVec;
    /// let mut v: GrowVec<u8> = GrowVec::new();
    /// v.reserve(5).unwrap();
    /// assert_eq!(v.capacity(), 8);
    /// v.reserve(3).unwrap();
    /// assert_eq!(v.capacity(), 8);
    /// ```
    pub fn reserve(&mut self, n: usize) -> Result<(), Error> {
        if n <= self.capacity() {
            return Ok(());
        }
        self.reallocate_to(capacity_for(n)?)
    }

    /// Ensures room for `additional` more elements beyond `len`.
    #[inline]
    pub fn reserve_additional(&mut self, additional: usize) -> Result<(), Error> {
        let n = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        self.reserve(n)
    }

    /// Reallocates to exactly `len` slots; with `len == 0` the block is
    /// released entirely.
    pub fn shrink_to_fit(&mut self) -> Result<(), Error> {
        if self.len == self.capacity() {
            return Ok(());
        }
        if self.len == 0 {
            // SAFETY: no slot is live.
            unsafe { self.buf.free() };
            return Ok(());
        }
        self.reallocate_to(self.len)
    }

    /// Moves every live element into a fresh block of `new_cap >= len` slots.
    pub(crate) fn reallocate_to(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap >= self.len);
        let len = self.len;
        // SAFETY: the relocation leaves every old slot raw, and it cannot panic.
        unsafe {
            self.buf
                .reallocate(new_cap, |old, new| lifecycle::relocate(old, new, len))
        }
    }
}
