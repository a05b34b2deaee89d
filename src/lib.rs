// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `grow-vec`
//!
//! A `no_std` growable vector with an explicit allocation strategy and
//! fallible, panic-safe mutation.
//!
//! The core type, [`GrowVec<T, A>`], owns one contiguous block obtained from
//! an allocator `A: RawAlloc` (the global [`Heap`] by default) and keeps a
//! logical length `len <= capacity`. Elements can be any `T`: types with
//! non-trivial `Clone` and `Drop` are constructed and destroyed exactly once
//! per slot, even when one of those calls panics.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want allocation failure reported as a value ([`Error`]) instead of an
//!   abort.
//! - You need to plug in your own allocation strategy per container instance.
//! - You want predictable power-of-two growth.
//!
//! It may not be the best fit if:
//!
//! - You want `Vec`'s full API surface or its ecosystem integration.
//! - You need small-buffer (inline) storage.
//!
//! ## High-level semantics
//!
//! - Growth: when `n` slots are needed and the block is too small, the new
//!   capacity is the smallest power of two `>= n`.
//! - Slots `[0, len)` are live; slots `[len, capacity)` are raw memory.
//! - Operations that may allocate return `Result<_, Error>`. On `Err`, the
//!   vector is exactly as it was before the call.
//! - Trait impls that cannot return a `Result` ([`Clone`], [`Extend`],
//!   [`FromIterator`], `From<[T; N]>`, [`grow_vec!`]) panic on allocation
//!   failure.
//!
//! ## Range and indexing behavior
//!
//! `GrowVec` follows slice semantics for indexing and ranges:
//!
//! - `v[i]`, `v[a..b]` **panic** on out-of-bounds or inverted ranges;
//!   [`GrowVec::at`] returns [`Error::OutOfRange`] instead.
//! - [`GrowVec::erase`] and [`GrowVec::drain`] panic on invalid ranges, like
//!   [`Vec::drain`](alloc::vec::Vec::drain).
//! - Positional insertion past `len()` returns [`Error::OutOfRange`].
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `GrowVec<T, A>`.
//!   - Deserialization requires `A: Default`.
//!
//! ## Logging
//!
//! Block allocation, reallocation, and release are reported through the
//! [`log`](https://docs.rs/log) facade at `trace` level under the
//! `grow_vec::raw` target. The crate never installs a logger.
//!
//! ## Example
//!
//! ```rust
//! use grow_vec::{grow_vec, GrowVec};
//!
//! let mut v: GrowVec<u8> = GrowVec::new();
//! v.push(1).unwrap();
//! v.extend_from_slice(&[2, 3]).unwrap();
//! assert_eq!(v, [1, 2, 3]);
//! assert_eq!(v.capacity(), 4);
//!
//! assert!(v < grow_vec![1, 2, 3, 0]);
//! ```
//!
//! See [`GrowVec`] for detailed behavior, including panic safety and
//! invalidation rules.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
pub mod algo;
mod allocator;
mod error;
mod index;
mod iter;
mod lifecycle;
mod macros;
mod raw;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use allocator::{Heap, RawAlloc};
#[doc(hidden)]
pub use error::handle_alloc_failure;
pub use error::Error;
pub use iter::{Drain, IntoIter};
pub use vec::GrowVec;
