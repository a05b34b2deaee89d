// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowVec` type and its inherent API.
//!
//! `GrowVec<T, A>` is a contiguous, growable vector whose block comes from an
//! injected [`RawAlloc`] strategy. Operations are split one family per file
//! under `vec/`; this file holds the type, its accessors, and the trait impls
//! that treat it as a slice.
//!
//! Invariants (hold before and after every public method, including when a
//! method unwinds out of a panicking `Clone`, `Drop`, or closure):
//! - `len <= capacity`.
//! - Slots `[0, len)` hold live `T` values; slots `[len, capacity)` are raw and
//!   are never read as `T`.

mod assign;
mod as_ptr;
mod clone;
mod erase;
mod extend;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod reserve;
mod resize;
mod retain;
mod slice;
mod split_off;
mod transfer;
mod try_from_iter;

// Crate imports
use crate::{
    algo,
    allocator::{Heap, RawAlloc},
    error::Error,
    lifecycle,
    raw::RawBuf,
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Bound, Deref, DerefMut, RangeBounds},
};

/// A growable, heap-backed vector with a pluggable allocator.
///
/// `GrowVec<T, A>` owns one block of `capacity()` slots obtained from `A` and
/// keeps the first `len()` of them live. The block is allocated lazily, grown
/// to the next power of two when `len` must exceed `capacity`, and released
/// when the vector is dropped.
///
/// # Growth
///
/// Whenever `n` slots are needed and the current block is too small, the new
/// capacity is the smallest power of two `>= n`. Capacity never shrinks except
/// through [`shrink_to_fit`](GrowVec::shrink_to_fit) and the ownership
/// transfers ([`take`](GrowVec::take), [`move_from`](GrowVec::move_from)).
///
/// # Errors and panics
///
/// Operations that may allocate return `Result<_, Error>` and leave the vector
/// unchanged on error. Conditions that are caller bugs follow slice
/// conventions:
///
/// - `v[i]` and `v[a..b]` panic when out of bounds;
///   [`at`](GrowVec::at) is the checked form.
/// - [`erase`](GrowVec::erase) and [`drain`](GrowVec::drain) panic on an
///   inverted or out-of-bounds range.
/// - Positional insertion past `len()` returns [`Error::OutOfRange`].
///
/// If an element's `Clone`, `Drop`, or a user closure panics mid-operation,
/// the vector stays valid and nothing leaks. Insertion and allocation are
/// all-or-nothing; bulk replacement ([`assign`](GrowVec::assign) family) may
/// leave the vector empty.
///
/// # Borrowing
///
/// Any `&mut self` call ends every outstanding borrow of the contents. After
/// an insertion or erasure at position `p`, indices `>= p` name the shifted
/// elements. Raw pointers from [`as_ptr`](GrowVec::as_ptr) dangle after any
/// reallocation.
///
/// # Examples
///
/// ```rust
/// use grow_vec::GrowVec;
///
/// let mut v: GrowVec<u32> = GrowVec::new();
/// for i in 1..=5 {
///     v.push(i).unwrap();
/// }
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// assert_eq!(v.capacity(), 8);
///
/// v.insert(0, 0).unwrap();
/// assert_eq!(v.erase(1..3), 1);
/// assert_eq!(v.as_slice(), &[0, 3, 4, 5]);
/// ```
pub struct GrowVec<T, A: RawAlloc = Heap> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) len: usize,
}

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the current block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `capacity - len`, the number of pushes that will not reallocate.
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Upper bound on the length any `GrowVec<T, _>` can reach.
    #[inline]
    pub const fn max_size(&self) -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// Returns the allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Checked access: [`Error::OutOfRange`] if `i >= len`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        let len = self.len;
        self.get(i).ok_or(Error::OutOfRange { index: i, len })
    }

    /// Checked mutable access: [`Error::OutOfRange`] if `i >= len`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.get_mut(i).ok_or(Error::OutOfRange { index: i, len })
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Destroys every element, back to front. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Destroys the elements at `[new_len, len)`, back to front; a no-op if
    /// `new_len >= len`. Capacity is kept.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let excess = self.len - new_len;
        self.len = new_len;
        // SAFETY: `[new_len, new_len + excess)` was live and is now outside `len`.
        unsafe { lifecycle::destroy_range(self.buf.ptr().add(new_len), excess) }
    }

    /// Returns `true` if the vector contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

/// Resolves `range` against `len`, panicking the way slice ranges do.
#[track_caller]
pub(crate) fn resolve_range<R: RangeBounds<usize>>(range: R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i
            .checked_add(1)
            .unwrap_or_else(|| panic!("range start {i} overflows usize")),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i
            .checked_add(1)
            .unwrap_or_else(|| panic!("range end {i} overflows usize")),
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    if start > end {
        panic!("range start > end: {start} > {end}");
    }
    if end > len {
        panic!("range end {end} exceeds length {len}");
    }
    (start, end)
}

impl<T, A: RawAlloc> Drop for GrowVec<T, A> {
    fn drop(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: `[0, len)` is live; the block itself is released by `buf`.
        unsafe { lifecycle::destroy_range(self.buf.ptr(), len) }
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for GrowVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T, A: RawAlloc> Deref for GrowVec<T, A> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, A: RawAlloc> DerefMut for GrowVec<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: RawAlloc> AsRef<[T]> for GrowVec<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: RawAlloc> AsMut<[T]> for GrowVec<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, A: RawAlloc> Borrow<[T]> for GrowVec<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: RawAlloc> BorrowMut<[T]> for GrowVec<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Comparisons: same length and pairwise equal; lexicographic order.
impl<T, U, A, B> PartialEq<GrowVec<U, B>> for GrowVec<T, A>
where
    T: PartialEq<U>,
    A: RawAlloc,
    B: RawAlloc,
{
    fn eq(&self, other: &GrowVec<U, B>) -> bool {
        algo::elements_equal(self.iter(), other.iter())
    }
}
impl<T: PartialEq<U>, U, A: RawAlloc, const N: usize> PartialEq<[U; N]> for GrowVec<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        algo::elements_equal(self.iter(), other.iter())
    }
}
impl<T: PartialEq<U>, U, A: RawAlloc, const N: usize> PartialEq<&[U; N]> for GrowVec<T, A> {
    fn eq(&self, other: &&[U; N]) -> bool {
        algo::elements_equal(self.iter(), other.iter())
    }
}
impl<T: PartialEq<U>, U, A: RawAlloc> PartialEq<[U]> for GrowVec<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        algo::elements_equal(self.iter(), other.iter())
    }
}
impl<T: PartialEq<U>, U, A: RawAlloc> PartialEq<&[U]> for GrowVec<T, A> {
    fn eq(&self, other: &&[U]) -> bool {
        algo::elements_equal(self.iter(), other.iter())
    }
}
impl<T: Eq, A: RawAlloc> Eq for GrowVec<T, A> {}

impl<T: PartialOrd, A: RawAlloc, B: RawAlloc> PartialOrd<GrowVec<T, B>> for GrowVec<T, A> {
    fn partial_cmp(&self, other: &GrowVec<T, B>) -> Option<Ordering> {
        algo::lexicographic_partial_cmp(self.iter(), other.iter())
    }
}
impl<T: Ord, A: RawAlloc> Ord for GrowVec<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        algo::lexicographic_cmp(self.iter(), other.iter())
    }
}

impl<T: Hash, A: RawAlloc> Hash for GrowVec<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}
