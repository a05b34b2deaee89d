// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Buffer manager: the block behind a [`GrowVec`](crate::GrowVec).
//!
//! `RawBuf` owns one block of `cap` slots of `T` together with the allocator it
//! came from. It does not know which slots are live; callers keep that
//! discipline and must leave every slot raw before a block is released.
//!
//! Zero-byte blocks (`cap == 0` or zero-sized `T`) never reach the allocator:
//! they are represented by a dangling, well-aligned pointer.

// Crate imports
use crate::{allocator::RawAlloc, error::Error};

// Core imports
use core::{alloc::Layout, any::type_name, marker::PhantomData, mem, ptr::NonNull};

/// Growth policy: the capacity actually allocated when `requested` slots are needed.
///
/// Returns the smallest power of two `>= requested` (so `0` and `1` both map
/// to `1`), or [`Error::CapacityOverflow`] when no such `usize` exists.
#[inline]
pub(crate) fn capacity_for(requested: usize) -> Result<usize, Error> {
    requested
        .checked_next_power_of_two()
        .ok_or(Error::CapacityOverflow)
}

pub(crate) struct RawBuf<T, A: RawAlloc> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuf` owns its block exclusively; sending or sharing it is as safe
// as sending or sharing the `T`s it may hold and the allocator itself.
unsafe impl<T: Send, A: RawAlloc + Send> Send for RawBuf<T, A> {}
// SAFETY: see above.
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for RawBuf<T, A> {}

impl<T, A: RawAlloc> RawBuf<T, A> {
    /// An empty buffer: no block, `cap == 0`.
    #[inline]
    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// A buffer with a block of exactly `cap` slots.
    pub(crate) fn with_capacity_in(cap: usize, alloc: A) -> Result<Self, Error> {
        let ptr = allocate::<T, A>(&alloc, cap)?;
        Ok(Self {
            ptr,
            cap,
            alloc,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Moves to a freshly allocated block of `new_cap` slots.
    ///
    /// `fill(old, new)` moves whatever live state must survive from the old
    /// block into the new one. If allocation fails, nothing happens and the
    /// error is returned. If `fill` panics, the new block is released and the
    /// old one is kept.
    ///
    /// # Safety
    ///
    /// When `fill` returns normally, every slot of the old block must be raw.
    /// When it panics, it must not have made any slot of the old block raw.
    pub(crate) unsafe fn reallocate<F>(&mut self, new_cap: usize, fill: F) -> Result<(), Error>
    where
        F: FnOnce(*mut T, *mut T),
    {
        let new_ptr = allocate::<T, A>(&self.alloc, new_cap)?;
        let pending = Pending {
            alloc: &self.alloc,
            ptr: new_ptr,
            cap: new_cap,
        };
        fill(self.ptr.as_ptr(), new_ptr.as_ptr());
        mem::forget(pending);

        log::trace!(
            target: "grow_vec::raw",
            "reallocate {}: {} -> {} slots",
            type_name::<T>(),
            self.cap,
            new_cap
        );
        // SAFETY: `fill` left every old slot raw.
        unsafe { release::<T, A>(&self.alloc, self.ptr, self.cap) };
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Releases the block and returns to the empty state.
    ///
    /// # Safety
    ///
    /// Every slot must be raw.
    pub(crate) unsafe fn free(&mut self) {
        // SAFETY: forwarded from the caller's contract.
        unsafe { release::<T, A>(&self.alloc, self.ptr, self.cap) };
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Exchanges blocks (not allocators) with `other`.
    ///
    /// # Safety
    ///
    /// The two allocators must be interchangeable (they compare equal).
    pub(crate) unsafe fn swap_block(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.cap, &mut other.cap);
    }
}

impl<T, A: RawAlloc> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        // SAFETY: owners destroy or move out every live element before the
        // buffer itself is dropped.
        unsafe { release::<T, A>(&self.alloc, self.ptr, self.cap) }
    }
}

/// Releases a freshly allocated block if the fill step unwinds.
struct Pending<'a, T, A: RawAlloc> {
    alloc: &'a A,
    ptr: NonNull<T>,
    cap: usize,
}

impl<T, A: RawAlloc> Drop for Pending<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY: `fill` leaves the new block raw when it unwinds.
        unsafe { release::<T, A>(self.alloc, self.ptr, self.cap) }
    }
}

fn allocate<T, A: RawAlloc>(alloc: &A, cap: usize) -> Result<NonNull<T>, Error> {
    let layout = Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    let block = alloc.allocate(layout)?;
    log::trace!(
        target: "grow_vec::raw",
        "allocate {}: {} slots ({} bytes)",
        type_name::<T>(),
        cap,
        layout.size()
    );
    Ok(block.cast())
}

/// # Safety
///
/// `ptr` must have come from `allocate::<T, A>(alloc, cap)` (or be dangling with
/// a zero-byte layout) and every slot must be raw.
unsafe fn release<T, A: RawAlloc>(alloc: &A, ptr: NonNull<T>, cap: usize) {
    // `allocate` already validated this layout for non-empty blocks.
    let Ok(layout) = Layout::array::<T>(cap) else {
        return;
    };
    if layout.size() == 0 {
        return;
    }
    log::trace!(
        target: "grow_vec::raw",
        "release {}: {} slots",
        type_name::<T>(),
        cap
    );
    // SAFETY: forwarded from the caller's contract.
    unsafe { alloc.deallocate(ptr.cast(), layout) }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{capacity_for, RawBuf};
    use crate::{allocator::Heap, error::Error, lifecycle, testing::Budget};

    #[test]
    fn test_capacity_for_is_next_power_of_two() {
        assert_eq!(capacity_for(0), Ok(1));
        assert_eq!(capacity_for(1), Ok(1));
        assert_eq!(capacity_for(2), Ok(2));
        assert_eq!(capacity_for(3), Ok(4));
        assert_eq!(capacity_for(4), Ok(4));
        assert_eq!(capacity_for(5), Ok(8));
        assert_eq!(capacity_for(1000), Ok(1024));
    }

    #[test]
    fn test_capacity_for_overflow() {
        assert_eq!(capacity_for(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(capacity_for(usize::MAX / 2 + 2), Err(Error::CapacityOverflow));
    }

    #[test]
    fn test_empty_buffer_holds_no_block() {
        let budget = Budget::new(0);
        let buf: RawBuf<u32, &Budget> = RawBuf::new_in(&budget);
        assert_eq!(buf.capacity(), 0);
        drop(buf);
        assert_eq!(budget.outstanding(), 0);
    }

    #[test]
    fn test_zero_sized_types_never_allocate() {
        let budget = Budget::new(0);
        let buf: RawBuf<(), &Budget> = RawBuf::with_capacity_in(64, &budget).unwrap();
        assert_eq!(buf.capacity(), 64);
        assert_eq!(budget.outstanding(), 0);
    }

    #[test]
    fn test_layout_overflow_is_capacity_overflow() {
        let res = RawBuf::<u64, Heap>::with_capacity_in(usize::MAX / 4, Heap);
        assert!(matches!(res, Err(Error::CapacityOverflow)));
    }

    #[test]
    fn test_reallocate_moves_and_releases_old_block() {
        let budget = Budget::new(8);
        let mut buf: RawBuf<u32, &Budget> = RawBuf::with_capacity_in(2, &budget).unwrap();
        unsafe {
            buf.ptr().write(1);
            buf.ptr().add(1).write(2);
            buf.reallocate(4, |old, new| lifecycle::relocate(old, new, 2))
                .unwrap();
            assert_eq!(buf.capacity(), 4);
            assert_eq!(*buf.ptr(), 1);
            assert_eq!(*buf.ptr().add(1), 2);
        }
        assert_eq!(budget.outstanding(), 1);
        drop(buf);
        assert_eq!(budget.outstanding(), 0);
    }

    #[test]
    fn test_reallocate_failure_keeps_old_block() {
        let budget = Budget::new(1);
        let mut buf: RawBuf<u32, &Budget> = RawBuf::with_capacity_in(2, &budget).unwrap();
        let before = buf.ptr();
        let res = unsafe { buf.reallocate(4, |_, _| unreachable!()) };
        assert!(matches!(res, Err(Error::AllocFailed { .. })));
        assert_eq!(buf.ptr(), before);
        assert_eq!(buf.capacity(), 2);
        assert_eq!(budget.outstanding(), 1);
    }

    #[test]
    fn test_reallocate_panic_releases_new_block() {
        let budget = Budget::new(2);
        let mut buf: RawBuf<u32, &Budget> = RawBuf::with_capacity_in(2, &budget).unwrap();
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| unsafe {
            let _ = buf.reallocate(4, |_, _| panic!("fill failed"));
        }));
        assert!(res.is_err());
        assert_eq!(buf.capacity(), 2);
        assert_eq!(budget.outstanding(), 1);
    }

    #[test]
    fn test_free_and_swap_block() {
        let mut a: RawBuf<u8, Heap> = RawBuf::with_capacity_in(8, Heap).unwrap();
        let mut b: RawBuf<u8, Heap> = RawBuf::new_in(Heap);
        unsafe { a.swap_block(&mut b) };
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 8);
        unsafe { b.free() };
        assert_eq!(b.capacity(), 0);
    }
}
