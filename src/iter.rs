// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`GrowVec`](crate::GrowVec).
//!
//! - `IntoIter<T, A>` takes over the block and yields by value; it supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//!   Elements it never yields are destroyed when it is dropped.
//! - [`Drain`] removes a range in place and yields it by value.
//! - `&GrowVec` and `&mut GrowVec` iterate as slices.

mod drain;
mod from_iterator;

pub use drain::Drain;

// Crate imports
use crate::{
    allocator::{Heap, RawAlloc},
    lifecycle,
    raw::RawBuf,
    vec::GrowVec,
};

// Core imports
use core::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr};

/// Owned iterator returned by `GrowVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. The live elements are always
/// `[front, back)` of the block.
pub struct IntoIter<T, A: RawAlloc = Heap> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, A: RawAlloc> IntoIter<T, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is live.
        unsafe {
            core::slice::from_raw_parts(self.buf.ptr().add(self.front), self.back - self.front)
        }
    }

    /// Drops the `n` elements after `front` (at most the remaining ones).
    fn skip_front(&mut self, n: usize) {
        let start = self.front;
        let n = n.min(self.back - start);
        self.front += n;
        // SAFETY: the run was live and is now outside `[front, back)`.
        unsafe { lifecycle::destroy_range(self.buf.ptr().add(start), n) }
    }

    /// Drops the `n` elements before `back` (at most the remaining ones).
    fn skip_back(&mut self, n: usize) {
        let n = n.min(self.back - self.front);
        self.back -= n;
        // SAFETY: as in `skip_front`.
        unsafe { lifecycle::destroy_range(self.buf.ptr().add(self.back), n) }
    }
}

impl<T, A: RawAlloc> Iterator for IntoIter<T, A> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and is now outside `[front, back)`.
            Some(unsafe { self.buf.ptr().add(i).read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.skip_front(n);
        self.next()
    }
}

impl<T, A: RawAlloc> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: as in `next`.
            Some(unsafe { self.buf.ptr().add(self.back).read() })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.skip_back(n);
        self.next_back()
    }
}
impl<T, A: RawAlloc> FusedIterator for IntoIter<T, A> {}
impl<T, A: RawAlloc> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: RawAlloc> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let rem = self.back - self.front;
        self.skip_front(rem);
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a GrowVec<T, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, A: RawAlloc> IntoIterator for &'a mut GrowVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, A: RawAlloc> IntoIterator for GrowVec<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(self) -> Self::IntoIter {
        let me = ManuallyDrop::new(self);
        // SAFETY: `me` is never dropped, so the buffer is moved out exactly once.
        let buf = unsafe { ptr::read(&me.buf) };
        IntoIter {
            buf,
            front: 0,
            back: me.len,
        }
    }
}
