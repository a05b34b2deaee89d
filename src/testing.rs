// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test fixtures.
//!
//! - [`Tracked`] records its own lifecycle in a shared [`Ledger`]: live count,
//!   drop order, and optional panics on clone or drop.
//! - [`Budget`] is an allocator that grants a fixed number of allocations and
//!   counts the blocks still outstanding.

// Crate imports
use crate::{
    allocator::{Heap, RawAlloc},
    error::Error,
};

// Core imports
use core::{
    alloc::Layout,
    cell::{Cell, RefCell},
    fmt,
    ptr::NonNull,
};

// Std imports
use std::{rc::Rc, vec::Vec};

#[derive(Default)]
pub(crate) struct Ledger {
    live: Cell<isize>,
    dropped: RefCell<Vec<i32>>,
    clones_left: Cell<Option<usize>>,
    panic_on_drop: Cell<Option<i32>>,
}

impl Ledger {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn make(self: &Rc<Self>, value: i32) -> Tracked {
        self.live.set(self.live.get() + 1);
        Tracked {
            value,
            ledger: Rc::clone(self),
        }
    }

    /// Number of `Tracked` values currently alive.
    pub(crate) fn live(&self) -> isize {
        self.live.get()
    }

    /// Values in the order they were dropped.
    pub(crate) fn drop_order(&self) -> Vec<i32> {
        self.dropped.borrow().clone()
    }

    /// Allows `n` more clones; the one after that panics.
    pub(crate) fn panic_after_clones(&self, n: usize) {
        self.clones_left.set(Some(n));
    }

    /// Makes the next drop of a value equal to `value` panic (once).
    pub(crate) fn panic_on_drop(&self, value: i32) {
        self.panic_on_drop.set(Some(value));
    }
}

pub(crate) struct Tracked {
    pub(crate) value: i32,
    ledger: Rc<Ledger>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        match self.ledger.clones_left.get() {
            Some(0) => {
                self.ledger.clones_left.set(None);
                panic!("clone budget exhausted");
            }
            Some(n) => self.ledger.clones_left.set(Some(n - 1)),
            None => {}
        }
        self.ledger.make(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.live.set(self.ledger.live.get() - 1);
        self.ledger.dropped.borrow_mut().push(self.value);
        if self.ledger.panic_on_drop.get() == Some(self.value) {
            self.ledger.panic_on_drop.set(None);
            panic!("drop of {} failed", self.value);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// An allocator that grants `n` allocations and then refuses.
pub(crate) struct Budget {
    allocs_left: Cell<usize>,
    outstanding: Cell<isize>,
}

impl Budget {
    pub(crate) fn new(allocs: usize) -> Self {
        Self {
            allocs_left: Cell::new(allocs),
            outstanding: Cell::new(0),
        }
    }

    /// Blocks allocated and not yet released.
    pub(crate) fn outstanding(&self) -> isize {
        self.outstanding.get()
    }

    pub(crate) fn refill(&self, allocs: usize) {
        self.allocs_left.set(allocs);
    }
}

// Instances are only interchangeable with themselves.
impl PartialEq for Budget {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

// SAFETY: forwards to `Heap` for the actual memory.
unsafe impl RawAlloc for Budget {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, Error> {
        let left = self.allocs_left.get();
        if left == 0 {
            return Err(Error::AllocFailed {
                size: layout.size(),
                align: layout.align(),
            });
        }
        let block = Heap.allocate(layout)?;
        self.allocs_left.set(left - 1);
        self.outstanding.set(self.outstanding.get() + 1);
        Ok(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.outstanding.set(self.outstanding.get() - 1);
        // SAFETY: the block came from `Heap` in `allocate`.
        unsafe { Heap.deallocate(ptr, layout) }
    }
}
