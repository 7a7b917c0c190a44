//! K-th largest element via randomized QuickSelect.
//!
//! [`kth_largest`] finds the `rank`-th largest value of a slice in average
//! linear time by partitioning around a uniformly random pivot. The pivot
//! index is redrawn on every partition, which is what defeats adversarial
//! inputs that would drive a fixed-pivot strategy quadratic; the worst case
//! remains quadratic, which is inherent to the algorithm family.
//!
//! The randomness source is injected as a parameter rather than read from
//! ambient global state, so tests can fix a seed and production callers can
//! pass [`rand::rngs::ThreadRng`] or any other [`Rng`]. The numeric result
//! is invariant under the seed; only the final permutation of the slice
//! depends on it.
//!
//! # Mutation contract
//!
//! The slice is permuted in place as a side effect of partitioning. Callers
//! that need the original order must copy the data before calling. This is
//! deliberate: it lets callers that do not care about order avoid the copy
//! entirely.
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use seqgrid::select::kth_largest;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut values = vec![3, 2, 1, 5, 6, 4];
//! assert_eq!(kth_largest(&mut values, 2, &mut rng), Ok(5));
//! ```

use std::cmp::Ordering;

use rand::Rng;

use crate::error::ComputeError;

/// Returns the `rank`-th largest value of `values` (`rank = 1` is the
/// maximum, `rank = len` the minimum).
///
/// Duplicates are allowed and count individually: the 2nd largest of
/// `[5, 5, 1]` is `5`. Which duplicate occurrence ends up at the partition
/// boundary depends on the pivot draws, but the returned value does not.
///
/// The slice is permuted in place; see the module docs for the mutation
/// contract.
///
/// # Errors
///
/// Returns [`ComputeError::InvalidArgument`] before touching the slice if
/// `values` is empty, `rank` is zero, or `rank` exceeds the slice length.
pub fn kth_largest<T, R>(values: &mut [T], rank: usize, rng: &mut R) -> Result<T, ComputeError>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if values.is_empty() {
        return Err(ComputeError::invalid_argument(
            "values",
            "must not be empty",
        ));
    }
    if rank == 0 {
        return Err(ComputeError::invalid_argument("rank", "must be at least 1"));
    }
    if rank > values.len() {
        return Err(ComputeError::invalid_argument(
            "rank",
            format!("must not exceed the sequence length ({rank} > {})", values.len()),
        ));
    }

    // Zero-based index of the answer, counted from the largest end.
    let target = rank - 1;
    let mut left = 0;
    let mut right = values.len() - 1;

    loop {
        let boundary = partition(values, left, right, rng);
        match boundary.cmp(&target) {
            Ordering::Equal => return Ok(values[boundary].clone()),
            Ordering::Greater => right = boundary - 1,
            Ordering::Less => left = boundary + 1,
        }
    }
}

/// Partitions `values[left..=right]` around a uniformly random pivot in
/// descending order and returns the pivot's final index.
///
/// After the call, every element strictly greater than the pivot value
/// precedes the returned index and every element less than or equal to it
/// (ties included) follows. Ties landing on the ≤ side is the observable
/// tie-break documented in [`kth_largest`].
fn partition<T, R>(values: &mut [T], left: usize, right: usize, rng: &mut R) -> usize
where
    T: Ord,
    R: Rng + ?Sized,
{
    let pivot = rng.random_range(left..=right);
    values.swap(pivot, right);

    let mut boundary = left;
    for index in left..right {
        if values[index] > values[right] {
            values.swap(index, boundary);
            boundary += 1;
        }
    }

    values.swap(boundary, right);
    boundary
}
