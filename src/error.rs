// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowVec`.
//!
//! These errors represent allocation and bounds conditions.
//! They are `Copy` and implement `core::error::Error`.

/// Errors returned by operations on [`GrowVec`](crate::GrowVec).
///
/// Whenever one of these is returned, the vector is left exactly as it was
/// before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The allocation provider could not supply a block of this layout.
    #[error("allocation of {size} bytes (align {align}) failed")]
    AllocFailed {
        /// Requested block size in bytes.
        size: usize,
        /// Requested block alignment.
        align: usize,
    },
    /// The requested capacity cannot be represented.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// An index or position was past the current logical length.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length at the time of the call.
        len: usize,
    },
}

impl Error {
    /// Returns `true` for the allocation-class errors
    /// ([`AllocFailed`](Error::AllocFailed) and [`CapacityOverflow`](Error::CapacityOverflow)).
    #[inline]
    pub const fn is_alloc(&self) -> bool {
        matches!(self, Self::AllocFailed { .. } | Self::CapacityOverflow)
    }
}

/// Panics with `err`.
///
/// Used by trait impls that have no way to return a `Result` (`Clone`,
/// `Extend`, `FromIterator`, `From<[T; N]>`, [`grow_vec!`](crate::grow_vec)).
#[doc(hidden)]
#[cold]
#[inline(never)]
#[track_caller]
pub fn handle_alloc_failure(err: Error) -> ! {
    panic!("grow-vec: {err}")
}
