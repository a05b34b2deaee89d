// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenarios through the public API only.

use grow_vec::{algo, grow_vec, Error, GrowVec, Heap, RawAlloc};

use std::{
    alloc::Layout,
    cell::Cell,
    panic::{catch_unwind, AssertUnwindSafe},
    ptr::NonNull,
    rc::Rc,
};

#[test]
fn push_one_through_five() {
    let mut v: GrowVec<i32> = GrowVec::new();
    for i in 1..=5 {
        v.push(i).unwrap();
    }
    assert_eq!(v, [1, 2, 3, 4, 5]);
    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 8);
}

#[test]
fn insert_at_front_and_middle() {
    let mut v = grow_vec![1, 3];
    assert_eq!(v.insert(0, 0), Ok(0));
    assert_eq!(v, [0, 1, 3]);
    assert_eq!(v.insert(2, 2), Ok(2));
    assert_eq!(v, [0, 1, 2, 3]);
}

#[test]
fn erase_a_run() {
    let mut v = grow_vec![1, 2, 3, 4, 5];
    let next = v.erase(1..3);
    assert_eq!(next, 1);
    assert_eq!(v, [1, 4, 5]);
    assert_eq!(v[next], 4);
}

#[test]
fn checked_access_at_the_boundary() {
    let v = grow_vec![1, 2, 3];
    let len = v.len();
    assert_eq!(v.at(len), Err(Error::OutOfRange { index: 3, len: 3 }));
    assert_eq!(v.at(len - 1), Ok(&3));
    assert_eq!(v.at(len - 1).ok(), v.last());
}

#[test]
fn comparison_of_literal_lists() {
    let a = grow_vec![1, 2, 3];
    let mut b = grow_vec![1, 2, 3];
    assert_eq!(a, b);
    assert!(!algo::lexicographic_less(&a, &b));

    b.push(4).unwrap();
    assert_ne!(a, b);
    assert!(b > a);
    assert!(algo::lexicographic_less(&a, &b));
}

#[test]
fn take_and_move_from_leave_an_empty_source() {
    let mut a = grow_vec![String::from("x"), String::from("y")];
    let b = a.take();
    assert!(a.is_empty());
    assert_eq!(a.capacity(), 0);
    assert_eq!(b, ["x", "y"]);

    let mut c = b;
    let mut d: GrowVec<String> = GrowVec::new();
    d.move_from(&mut c).unwrap();
    assert!(c.is_empty());
    assert_eq!(c.capacity(), 0);
    assert_eq!(d, ["x", "y"]);
}

/// Counts live instances through a shared cell.
struct Counted(Rc<Cell<isize>>);

impl Counted {
    fn new(live: &Rc<Cell<isize>>) -> Self {
        live.set(live.get() + 1);
        Counted(Rc::clone(live))
    }
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        Counted::new(&self.0)
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

#[test]
fn every_construction_is_paired_with_one_destruction() {
    let live = Rc::new(Cell::new(0));
    {
        let mut v: GrowVec<Counted> = GrowVec::new();
        for _ in 0..10 {
            v.push(Counted::new(&live)).unwrap();
        }
        v.insert_n(3, 4, Counted::new(&live)).unwrap();
        v.erase(2..9);
        let w = v.clone();
        v.resize(20, Counted::new(&live)).unwrap();
        v.truncate(5);
        v.retain(|_| false);
        drop(w.into_iter().skip(2));
        v.assign(3, Counted::new(&live)).unwrap();
        let _ = v.split_off(1).unwrap();
        assert_eq!(live.get(), 1);
    }
    assert_eq!(live.get(), 0);
}

#[test]
fn panicking_element_leaves_a_valid_vector() {
    #[derive(Debug)]
    struct Bomb(u32);

    impl Clone for Bomb {
        fn clone(&self) -> Self {
            if self.0 == 3 {
                panic!("boom");
            }
            Bomb(self.0)
        }
    }

    let mut v: GrowVec<Bomb> = (0..3).map(Bomb).collect();
    let src = [Bomb(10), Bomb(3), Bomb(11)];
    let res = catch_unwind(AssertUnwindSafe(|| v.insert_from_slice(1, &src)));
    assert!(res.is_err());
    assert_eq!(v.iter().map(|b| b.0).collect::<Vec<_>>(), [0, 1, 2]);
}

/// An allocator that fails every request.
#[derive(Default, Clone, PartialEq)]
struct Refuse;

unsafe impl RawAlloc for Refuse {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, Error> {
        Err(Error::AllocFailed {
            size: layout.size(),
            align: layout.align(),
        })
    }

    unsafe fn deallocate(&self, _: NonNull<u8>, _: Layout) {
        unreachable!("nothing was ever allocated");
    }
}

#[test]
fn allocation_failure_is_reported_and_harmless() {
    let mut v: GrowVec<u64, Refuse> = GrowVec::new_in(Refuse);
    assert_eq!(v.push(1), Err(Error::AllocFailed { size: 8, align: 8 }));
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 0);

    // Zero-sized elements never reach the allocator.
    let mut z: GrowVec<(), Refuse> = GrowVec::default();
    z.resize(100, ()).unwrap();
    assert_eq!(z.len(), 100);
}

#[test]
fn heap_is_the_default_allocator() {
    let v: GrowVec<u8> = GrowVec::new();
    assert_eq!(*v.allocator(), Heap);
}
