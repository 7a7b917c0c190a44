//! Dispatch boundary: operation names, request/response types, validation.
//!
//! This is the thin layer between an external caller (an HTTP handler, a
//! CLI, a test harness) and the three compute kernels. It owns everything
//! the kernels do not: mapping an operation name to a kernel, converting
//! raw request integers into the typed arguments each kernel expects, and
//! relaying the typed result or error back out.
//!
//! # Design
//!
//! - Requests arrive as [`ComputeRequest`] values with already-parsed
//!   integer fields; transport-level parsing is the caller's job.
//! - All range validation happens here or in the kernels before any
//!   mutation, so a rejected request has no partial side effects.
//! - The randomness source for selection is injected into [`dispatch`];
//!   [`dispatch_default`] is the production convenience that uses the
//!   thread-local RNG.
//! - The layer emits `tracing` debug events (operation name, input sizes,
//!   rejections); installing a subscriber is the host binary's concern.
//!
//! # Examples
//!
//! ```rust
//! use seqgrid::boundary::{ComputeRequest, ComputeResponse, dispatch_default};
//!
//! let response = dispatch_default(ComputeRequest::Rotate {
//!     values: vec![1, 2, 3, 4, 5, 6, 7],
//!     offset: 3,
//! })?;
//! assert_eq!(response, ComputeResponse::Sequence(vec![5, 6, 7, 1, 2, 3, 4]));
//! # Ok::<(), seqgrid::error::ComputeError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use crate::error::ComputeError;
use crate::grid::{Grid, longest_increasing_path};
use crate::rotate::rotate_right;
use crate::select::kth_largest;

// =============================================================================
// Operation
// =============================================================================

/// The three operation names understood by the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// In-place right rotation of a sequence.
    Rotate,
    /// K-th largest element via randomized selection.
    SelectKth,
    /// Longest strictly-increasing path in a grid.
    LongestIncreasingPath,
}

impl Operation {
    /// The external name of this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rotate => "rotate",
            Self::SelectKth => "selectKth",
            Self::LongestIncreasingPath => "longestIncreasingPath",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ComputeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "rotate" => Ok(Self::Rotate),
            "selectKth" => Ok(Self::SelectKth),
            "longestIncreasingPath" => Ok(Self::LongestIncreasingPath),
            _ => Err(ComputeError::invalid_argument(
                "operation",
                format!("unknown operation `{name}`"),
            )),
        }
    }
}

// =============================================================================
// Request / Response
// =============================================================================

/// A fully-parsed compute request, one variant per operation.
///
/// Integer fields are `i64` on purpose: the boundary accepts whatever the
/// transport parsed and rejects out-of-range values itself, rather than
/// forcing every caller to pre-narrow into `usize`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComputeRequest {
    /// Rotate `values` right by `offset` positions.
    Rotate {
        /// The sequence to rotate. May be empty.
        values: Vec<i64>,
        /// Rotation offset; negative values are rejected, values beyond the
        /// length wrap around.
        offset: i64,
    },
    /// Find the `rank`-th largest element of `values`.
    SelectKth {
        /// The sequence to select from. Must be non-empty.
        values: Vec<i64>,
        /// One-based rank from the largest end; must satisfy
        /// `1 ≤ rank ≤ values.len()`.
        rank: i64,
    },
    /// Find the longest strictly-increasing path in the grid given as rows.
    LongestIncreasingPath {
        /// The grid rows; must be non-empty and rectangular.
        rows: Vec<Vec<i64>>,
    },
}

impl ComputeRequest {
    /// The operation this request maps to.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Rotate { .. } => Operation::Rotate,
            Self::SelectKth { .. } => Operation::SelectKth,
            Self::LongestIncreasingPath { .. } => Operation::LongestIncreasingPath,
        }
    }
}

/// A successful compute result, one variant per operation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComputeResponse {
    /// The rotated sequence.
    Sequence(Vec<i64>),
    /// The selected k-th largest value.
    Value(i64),
    /// The longest increasing path length, in cells.
    PathLength(usize),
}

// =============================================================================
// Dispatch
// =============================================================================

/// Runs `request` against the matching kernel with the given randomness
/// source and relays the typed result.
///
/// # Errors
///
/// Returns [`ComputeError::InvalidArgument`] for any precondition violation
/// (negative offset, non-positive or out-of-range rank, empty selection
/// input, empty or ragged grid). Rejections happen before any computation,
/// so they carry no partial results.
pub fn dispatch<R>(request: ComputeRequest, rng: &mut R) -> Result<ComputeResponse, ComputeError>
where
    R: Rng + ?Sized,
{
    let operation = request.operation();
    let result = run(request, rng);
    if let Err(error) = &result {
        debug!(operation = operation.as_str(), %error, "request rejected");
    }
    result
}

/// [`dispatch`] with the thread-local RNG, for callers that do not need a
/// reproducible pivot sequence.
///
/// # Errors
///
/// Same contract as [`dispatch`].
pub fn dispatch_default(request: ComputeRequest) -> Result<ComputeResponse, ComputeError> {
    dispatch(request, &mut rand::rng())
}

fn run<R>(request: ComputeRequest, rng: &mut R) -> Result<ComputeResponse, ComputeError>
where
    R: Rng + ?Sized,
{
    match request {
        ComputeRequest::Rotate { mut values, offset } => {
            debug!(len = values.len(), offset, "dispatching rotate");
            let offset = usize::try_from(offset).map_err(|_| {
                ComputeError::invalid_argument("offset", "must be non-negative")
            })?;
            rotate_right(&mut values, offset);
            Ok(ComputeResponse::Sequence(values))
        }
        ComputeRequest::SelectKth { mut values, rank } => {
            debug!(len = values.len(), rank, "dispatching selectKth");
            let rank = usize::try_from(rank)
                .map_err(|_| ComputeError::invalid_argument("rank", "must be at least 1"))?;
            let value = kth_largest(&mut values, rank, rng)?;
            Ok(ComputeResponse::Value(value))
        }
        ComputeRequest::LongestIncreasingPath { rows } => {
            debug!(rows = rows.len(), "dispatching longestIncreasingPath");
            let grid = Grid::from_rows(rows)?;
            Ok(ComputeResponse::PathLength(longest_increasing_path(&grid)))
        }
    }
}
