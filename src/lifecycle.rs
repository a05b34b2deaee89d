// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifecycle engine: moves slots between the raw and live states.
//!
//! Every function here works on a run of slots given by a pointer and a count,
//! never on a whole vector. Construction writes into raw slots; destruction
//! drops live slots in place. Each slot sees exactly one construction per
//! destruction.
//!
//! Bulk construction is all-or-nothing: if producing an element panics, the
//! slots this call already constructed are destroyed before the panic
//! continues, so the run is left entirely raw.
//!
//! Relocation is a bitwise move. A moved-from Rust value has nothing left to
//! destroy, so after [`relocate`] or [`shift`] the source slots are raw.

// Core imports
use core::{mem, ptr};

/// Constructs `count` values produced by `make` into `dst[..count]`.
///
/// # Safety
///
/// `dst[..count]` must be raw slots of one block.
pub(crate) unsafe fn construct_with<T, F>(dst: *mut T, count: usize, mut make: F)
where
    F: FnMut() -> T,
{
    let mut guard = Constructed { dst, done: 0 };
    while guard.done < count {
        let value = make();
        // SAFETY: `guard.done < count`, so the slot is raw and in bounds.
        unsafe { dst.add(guard.done).write(value) };
        guard.done += 1;
    }
    mem::forget(guard);
}

/// Constructs `count - 1` clones of `value` followed by `value` itself.
///
/// With `count == 0`, `value` is simply dropped.
///
/// # Safety
///
/// `dst[..count]` must be raw slots of one block.
pub(crate) unsafe fn construct_fill<T: Clone>(dst: *mut T, count: usize, value: T) {
    if count == 0 {
        return;
    }
    // SAFETY: forwarded; the final slot is still raw after the clones.
    unsafe {
        construct_with(dst, count - 1, || value.clone());
        dst.add(count - 1).write(value);
    }
}

/// Constructs clones of `src` into `dst[..src.len()]`.
///
/// # Safety
///
/// `dst[..src.len()]` must be raw slots that do not overlap `src`.
pub(crate) unsafe fn construct_clone<T: Clone>(src: &[T], dst: *mut T) {
    let mut guard = Constructed { dst, done: 0 };
    for item in src {
        let value = item.clone();
        // SAFETY: `guard.done < src.len()`, so the slot is raw and in bounds.
        unsafe { dst.add(guard.done).write(value) };
        guard.done += 1;
    }
    mem::forget(guard);
}

/// Relocates `count` live slots from `src` into raw slots at `dst`.
///
/// Afterwards `src[..count]` is raw and `dst[..count]` is live.
///
/// # Safety
///
/// The runs must not overlap; `src[..count]` must be live and `dst[..count]` raw.
#[inline]
pub(crate) unsafe fn relocate<T>(src: *const T, dst: *mut T, count: usize) {
    // SAFETY: forwarded from the caller's contract.
    unsafe { ptr::copy_nonoverlapping(src, dst, count) }
}

/// Like [`relocate`], but the runs may overlap (both lie in one block).
///
/// # Safety
///
/// `src[..count]` must be live; the slots of `dst[..count]` outside that run
/// must be raw.
#[inline]
pub(crate) unsafe fn shift<T>(src: *const T, dst: *mut T, count: usize) {
    // SAFETY: forwarded from the caller's contract.
    unsafe { ptr::copy(src, dst, count) }
}

/// Destroys `ptr[..count]`, back to front.
///
/// If a destructor panics, the slots in front of it are still destroyed while
/// unwinding.
///
/// # Safety
///
/// `ptr[..count]` must be live, and must be treated as raw afterwards.
pub(crate) unsafe fn destroy_range<T>(ptr: *mut T, count: usize) {
    if !mem::needs_drop::<T>() {
        return;
    }
    let mut rest = Remaining { ptr, count };
    while rest.count > 0 {
        rest.count -= 1;
        // SAFETY: the slot is live and no longer covered by `rest`.
        unsafe { ptr::drop_in_place(ptr.add(rest.count)) };
    }
}

/// Destroys the slots a bulk construction managed to fill before unwinding.
struct Constructed<T> {
    dst: *mut T,
    done: usize,
}

impl<T> Drop for Constructed<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `done` slots were constructed by this call.
        unsafe { destroy_range(self.dst, self.done) }
    }
}

/// Front slots of a `destroy_range` run that are still live.
struct Remaining<T> {
    ptr: *mut T,
    count: usize,
}

impl<T> Drop for Remaining<T> {
    fn drop(&mut self) {
        // SAFETY: `ptr[..count]` is still live; only reached with `count > 0`
        // when a destructor unwinds.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr, self.count)) }
    }
}

/// Closes a gap of `count` raw slots at `index` by shifting the `tail` live
/// slots behind it down, then stores the resulting length.
///
/// Runs on drop, so it also fires while unwinding out of the code that had the
/// gap open.
pub(crate) struct CloseGap<'a, T> {
    pub(crate) base: *mut T,
    pub(crate) index: usize,
    pub(crate) count: usize,
    pub(crate) tail: usize,
    pub(crate) len: &'a mut usize,
}

impl<T> Drop for CloseGap<'_, T> {
    fn drop(&mut self) {
        if self.count > 0 && self.tail > 0 {
            // SAFETY: the tail starts right after the gap; the gap slots are raw.
            unsafe {
                shift(
                    self.base.add(self.index + self.count),
                    self.base.add(self.index),
                    self.tail,
                )
            };
        }
        *self.len = self.index + self.tail;
    }
}
