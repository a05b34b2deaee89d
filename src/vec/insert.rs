// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional insertion.
//!
//! Every entry point funnels into [`GrowVec::insert_with`], which opens a gap
//! of `count` raw slots at `index` and lets a fill step construct into it:
//!
//! - **In place** (`len + count <= capacity`): the tail `[index, len)` is
//!   shifted right by `count` in one overlapping move, so each slot is moved
//!   from exactly once. A [`CloseGap`] guard shifts it back if the fill
//!   unwinds.
//! - **Reallocating**: the new block is allocated first, the new elements are
//!   constructed at their final positions, then the prefix and the tail are
//!   relocated around them. Only then is the old block released.
//!
//! Both paths are all-or-nothing: on error or panic the vector is unchanged.

// Crate imports
use crate::{
    allocator::RawAlloc,
    error::Error,
    lifecycle::{self, CloseGap},
    raw::capacity_for,
    vec::GrowVec,
};

// Core imports
use core::mem;

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Inserts `value` at `index`, shifting the tail right.
    ///
    /// Returns the index of the inserted element, or [`Error::OutOfRange`] if
    /// `index > len`. On error the vector is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use grow_vec::grow_vec;
    /// let mut v = grow_vec![1, 3];
    /// assert_eq!(v.insert(0, 0), Ok(0));
    /// assert_eq!(v.insert(2, 2), Ok(2));
    /// assert_eq!(v, [0, 1, 2, 3]);
    /// ```
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, Error> {
        // SAFETY: the fill writes exactly one slot.
        unsafe { self.insert_with(index, 1, |dst| dst.write(value)) }
    }

    /// Inserts the value produced by `make` at `index`.
    ///
    /// `make` runs only after room has been made, and runs at most once.
    pub fn emplace<F>(&mut self, index: usize, make: F) -> Result<usize, Error>
    where
        F: FnOnce() -> T,
    {
        // SAFETY: the fill writes exactly one slot.
        unsafe { self.insert_with(index, 1, |dst| dst.write(make())) }
    }

    /// Inserts `count` clones of `value` at `index`.
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> Result<usize, Error>
    where
        T: Clone,
    {
        // SAFETY: `construct_fill` writes exactly `count` slots or none.
        unsafe {
            self.insert_with(index, count, |dst| {
                lifecycle::construct_fill(dst, count, value)
            })
        }
    }

    /// Inserts clones of every element of `src` at `index`, preserving order.
    pub fn insert_from_slice(&mut self, index: usize, src: &[T]) -> Result<usize, Error>
    where
        T: Clone,
    {
        // SAFETY: `construct_clone` writes exactly `src.len()` slots or none.
        unsafe {
            self.insert_with(index, src.len(), |dst| {
                lifecycle::construct_clone(src, dst)
            })
        }
    }

    /// Inserts every item of `iter` at `index`, preserving order.
    ///
    /// Items first fill the spare slots of the current block. Whatever does
    /// not fit is staged in a separate block from a clone of the allocator and
    /// moved over after a single [`reserve`](GrowVec::reserve). The items are
    /// then rotated into place.
    ///
    /// If the iterator panics or an allocation fails, the new items are
    /// destroyed and the vector is unchanged, including its block and
    /// capacity.
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = T>,
        A: Clone,
    {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfRange { index, len });
        }
        let mut iter = iter.into_iter();

        let guard = Rollback { vec: self, len };
        while guard.vec.len < guard.vec.capacity() {
            match iter.next() {
                // SAFETY: `len < capacity`, so the slot is raw.
                Some(item) => unsafe { guard.vec.buf.ptr().add(guard.vec.len).write(item) },
                None => break,
            }
            guard.vec.len += 1;
        }

        let mut overflow = GrowVec::new_in(guard.vec.allocator().clone());
        overflow.reserve(iter.size_hint().0)?;
        for item in iter {
            overflow.push(item)?;
        }
        let extra = overflow.len;
        if extra > 0 {
            guard.vec.reserve_additional(extra)?;
            // SAFETY: `extra` raw slots follow `len`. The staged elements are
            // moved out once and `overflow` no longer owns them.
            unsafe {
                lifecycle::relocate(
                    overflow.buf.ptr(),
                    guard.vec.buf.ptr().add(guard.vec.len),
                    extra,
                );
            }
            overflow.len = 0;
            guard.vec.len += extra;
        }

        let vec = guard.commit();
        let added = vec.len - len;
        vec.as_mut_slice()[index..].rotate_right(added);
        Ok(index)
    }

    /// Opens a gap of `count` raw slots at `index` and runs `fill` on its start.
    ///
    /// # Safety
    ///
    /// `fill(dst)` must either construct exactly `dst[..count]` or unwind with
    /// every slot of `dst[..count]` still raw.
    pub(crate) unsafe fn insert_with<F>(
        &mut self,
        index: usize,
        count: usize,
        fill: F,
    ) -> Result<usize, Error>
    where
        F: FnOnce(*mut T),
    {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfRange { index, len });
        }
        if count == 0 {
            return Ok(index);
        }
        let new_len = len.checked_add(count).ok_or(Error::CapacityOverflow)?;
        let tail = len - index;

        if new_len <= self.capacity() {
            let base = self.buf.ptr();
            // SAFETY: `[len, new_len)` is raw, so the shifted tail lands on raw
            // slots and leaves `[index, index + count)` raw for `fill`.
            unsafe {
                lifecycle::shift(base.add(index), base.add(index + count), tail);
                let gap = CloseGap {
                    base,
                    index,
                    count,
                    tail,
                    len: &mut self.len,
                };
                fill(base.add(index));
                mem::forget(gap);
            }
        } else {
            let new_cap = capacity_for(new_len)?;
            // SAFETY: `fill` constructs into the new block before anything
            // leaves the old one; the relocations then empty the old block.
            unsafe {
                self.buf.reallocate(new_cap, |old, new| {
                    fill(new.add(index));
                    lifecycle::relocate(old, new, index);
                    lifecycle::relocate(old.add(index), new.add(index + count), tail);
                })?;
            }
        }
        self.len = new_len;
        Ok(index)
    }
}

/// Truncates back to `len` unless committed.
struct Rollback<'a, T, A: RawAlloc> {
    vec: &'a mut GrowVec<T, A>,
    len: usize,
}

impl<'a, T, A: RawAlloc> Rollback<'a, T, A> {
    fn commit(self) -> &'a mut GrowVec<T, A> {
        let this = mem::ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the borrow is moved out once.
        unsafe { core::ptr::read(&this.vec) }
    }
}

impl<T, A: RawAlloc> Drop for Rollback<'_, T, A> {
    fn drop(&mut self) {
        self.vec.truncate(self.len);
    }
}
