//! In-place right rotation of a sequence.
//!
//! [`rotate_right`] rotates a mutable slice right by `offset` positions
//! using the triple-reversal technique: reverse the whole slice, then the
//! prefix of length `offset % len`, then the remaining suffix. This uses
//! O(1) space beyond the input buffer regardless of the slice length.
//!
//! The offset is reduced modulo the length before rotating, so it may be
//! arbitrarily large relative to the slice. Rotating an empty slice is a
//! no-op for any offset, and there is no error path: non-negativity of the
//! offset is guaranteed by its type, and out-of-range offsets do not exist
//! once reduced.
//!
//! # Examples
//!
//! ```rust
//! use seqgrid::rotate::rotate_right;
//!
//! let mut values = vec![1, 2, 3, 4, 5, 6, 7];
//! rotate_right(&mut values, 3);
//! assert_eq!(values, vec![5, 6, 7, 1, 2, 3, 4]);
//!
//! // Offsets larger than the length wrap around.
//! let mut values = vec![1, 2, 3, 4, 5];
//! rotate_right(&mut values, 7);
//! assert_eq!(values, vec![4, 5, 1, 2, 3]);
//! ```

/// Rotates `values` right by `offset % values.len()` positions, in place.
///
/// The slice is mutated through the exclusive borrow; the result is the
/// same length and the same multiset of elements, shifted right with
/// wrap-around. An empty slice or a reduced offset of zero leaves the
/// slice untouched.
pub fn rotate_right<T>(values: &mut [T], offset: usize) {
    let length = values.len();
    if length == 0 {
        return;
    }

    let split = offset % length;
    if split == 0 {
        return;
    }

    // Reverse the whole slice, then the prefix [0, split), then the
    // suffix [split, length). This order yields a right rotation.
    values.reverse();
    values[..split].reverse();
    values[split..].reverse();
}
