// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Creates a [`GrowVec`](crate::GrowVec) from a list of elements or a
/// repeated element, like [`vec!`](alloc::vec!).
///
/// - `grow_vec![]` is an empty vector with no block.
/// - `grow_vec![a, b, c]` moves the elements in order.
/// - `grow_vec![x; n]` holds `n` clones of `x` (`T: Clone`).
///
/// Panics if the allocation fails.
///
/// # Examples
/// ```
/// use grow_vec::grow_vec;
///
/// let v = grow_vec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let z = grow_vec![0u8; 4];
/// assert_eq!(z.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! grow_vec {
    () => {
        $crate::GrowVec::new()
    };
    ($elem:expr; $n:expr) => {
        match $crate::GrowVec::from_elem($n, $elem) {
            ::core::result::Result::Ok(v) => v,
            ::core::result::Result::Err(e) => $crate::handle_alloc_failure(e),
        }
    };
    ($($x:expr),+ $(,)?) => {
        $crate::GrowVec::from([$($x),+])
    };
}
