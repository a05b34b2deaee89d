// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, lifecycle, vec::GrowVec};

// Core imports
use core::ptr;

impl<T, A: RawAlloc> GrowVec<T, A> {
    /// Retains only the elements for which `f` returns `true`, preserving order.
    ///
    /// The predicate is applied to each element in order, exactly once.
    /// Rejected elements are destroyed as they are visited. If `f` or a
    /// destructor panics, the unvisited elements are kept.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let len = self.len;
        // Visited-and-kept elements are compacted to the front; `len` is only
        // restored once the scan finishes or unwinds.
        self.len = 0;
        let mut scan = Compact {
            vec: self,
            read: 0,
            write: 0,
            len,
        };
        let base = scan.vec.buf.ptr();
        while scan.read < scan.len {
            // SAFETY: `read < len`, so the slot is live and not yet visited.
            let cur = unsafe { base.add(scan.read) };
            if f(unsafe { &*cur }) {
                if scan.read != scan.write {
                    // SAFETY: `write < read`, and slot `write` is raw.
                    unsafe { lifecycle::relocate(cur, base.add(scan.write), 1) };
                }
                scan.write += 1;
                scan.read += 1;
            } else {
                scan.read += 1;
                // SAFETY: the slot is live and now counted as visited.
                unsafe { ptr::drop_in_place(cur) };
            }
        }
    }
}

/// Keeps `[0, write)` and the unvisited `[read, len)`, closing the gap between
/// them on drop.
struct Compact<'a, T, A: RawAlloc> {
    vec: &'a mut GrowVec<T, A>,
    read: usize,
    write: usize,
    len: usize,
}

impl<T, A: RawAlloc> Drop for Compact<'_, T, A> {
    fn drop(&mut self) {
        let rest = self.len - self.read;
        let base = self.vec.buf.ptr();
        if rest > 0 && self.read != self.write {
            // SAFETY: `[read, len)` is live and `[write, read)` is raw.
            unsafe { lifecycle::shift(base.add(self.read), base.add(self.write), rest) };
        }
        self.vec.len = self.write + rest;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{testing::Ledger, GrowVec};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_retain_is_stable() {
        let mut v = crate::grow_vec![1, 2, 3, 4, 5, 6];
        v.retain(|x| x % 2 == 0);
        assert_eq!(v.as_slice(), &[2, 4, 6]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_retain_destroys_rejected_in_visit_order() {
        let ledger = Ledger::new();
        let mut v: GrowVec<_> = (0..6).map(|i| ledger.make(i)).collect();
        v.retain(|t| t.value % 3 == 0);
        assert_eq!(ledger.drop_order(), [1, 2, 4, 5]);
        assert_eq!(v.iter().map(|t| t.value).collect::<Vec<_>>(), [0, 3]);
    }

    #[test]
    fn test_retain_panicking_predicate_keeps_unvisited() {
        let ledger = Ledger::new();
        let mut v: GrowVec<_> = (0..6).map(|i| ledger.make(i)).collect();
        let res = catch_unwind(AssertUnwindSafe(|| {
            v.retain(|t| {
                if t.value == 3 {
                    panic!("predicate failed");
                }
                t.value != 1
            })
        }));
        assert!(res.is_err());
        assert_eq!(v.iter().map(|t| t.value).collect::<Vec<_>>(), [0, 2, 3, 4, 5]);
        assert_eq!(ledger.live(), 5);
    }

    #[test]
    fn test_retain_all_and_none() {
        let mut v = crate::grow_vec![1, 2, 3];
        v.retain(|_| true);
        assert_eq!(v, [1, 2, 3]);
        v.retain(|_| false);
        assert!(v.is_empty());
    }
}
