// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Allocation providers.
//!
//! A [`GrowVec`](crate::GrowVec) never calls the global allocator directly. It
//! asks its [`RawAlloc`] strategy object for blocks and hands them back when
//! done. Two vectors whose allocators compare equal may exchange blocks
//! (see [`GrowVec::move_from`](crate::GrowVec::move_from)).

// Crate imports
use crate::error::Error;

// Core imports
use core::{alloc::Layout, ptr::NonNull};

/// A raw memory provider: turns a [`Layout`] into a block and back.
///
/// The provider only deals in bytes. Element construction and destruction are
/// done by the container itself on top of the returned block.
///
/// # Safety
///
/// Implementors must return blocks that are valid for reads and writes of
/// `layout.size()` bytes, aligned to `layout.align()`, and that stay valid
/// until they are passed back to [`deallocate`](RawAlloc::deallocate) with
/// the same layout. If the implementor is `PartialEq`, a block allocated by
/// one instance must be releasable through any instance comparing equal.
pub unsafe trait RawAlloc {
    /// Allocates a block for `layout`.
    ///
    /// Callers never request zero-sized layouts.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, Error>;

    /// Releases a block previously returned by [`allocate`](RawAlloc::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must denote a block currently allocated by this allocator (or one
    /// comparing equal to it) with exactly `layout`.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global heap, reached through [`alloc::alloc`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Heap;

// SAFETY: `alloc::alloc::alloc` returns blocks satisfying `layout`, and they stay
// valid until `dealloc` is called with the same layout. Every `Heap` shares the
// global allocator, so all instances are interchangeable.
unsafe impl RawAlloc for Heap {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, Error> {
        debug_assert_ne!(layout.size(), 0);
        // SAFETY: callers never request zero-sized layouts.
        let ptr = unsafe { alloc::alloc::alloc(layout) };
        NonNull::new(ptr).ok_or(Error::AllocFailed {
            size: layout.size(),
            align: layout.align(),
        })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller's contract.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}

// SAFETY: forwards to `A`, which upholds the contract.
unsafe impl<A: RawAlloc + ?Sized> RawAlloc for &A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, Error> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller's contract.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}
