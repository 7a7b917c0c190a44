//! # seqgrid
//!
//! Three stateless sequence/grid compute kernels behind a typed dispatch
//! boundary:
//!
//! - **Rotation** ([`rotate`]): in-place right rotation of a sequence by an
//!   arbitrary offset, via triple reversal in O(1) extra space.
//! - **Selection** ([`select`]): the k-th largest element via randomized
//!   QuickSelect with an injected randomness source.
//! - **Grid paths** ([`grid`]): the longest strictly-increasing 4-adjacent
//!   path in a rectangular integer grid, via memoized depth-first search
//!   over an explicit worklist.
//!
//! The kernels share no state and no data structures; they are composed
//! only at the [`boundary`], which maps an operation name to a kernel,
//! validates raw request integers, and relays the typed result or a
//! [`error::ComputeError`]. Every computation is a pure, synchronous
//! function over data owned exclusively by its caller, so any number of
//! invocations may run concurrently without coordination.
//!
//! ## Feature Flags
//!
//! - `serde`: serialization/deserialization for the boundary request,
//!   response, and error types.
//!
//! ## Example
//!
//! ```rust
//! use seqgrid::prelude::*;
//!
//! let response = dispatch_default(ComputeRequest::SelectKth {
//!     values: vec![3, 2, 1, 5, 6, 4],
//!     rank: 2,
//! })?;
//! assert_eq!(response, ComputeResponse::Value(5));
//! # Ok::<(), seqgrid::error::ComputeError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public surface of all four modules.
///
/// # Usage
///
/// ```rust
/// use seqgrid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::boundary::{
        ComputeRequest, ComputeResponse, Operation, dispatch, dispatch_default,
    };
    pub use crate::error::ComputeError;
    pub use crate::grid::{Grid, longest_increasing_path};
    pub use crate::rotate::rotate_right;
    pub use crate::select::kth_largest;
}

pub mod boundary;
pub mod error;
pub mod grid;
pub mod rotate;
pub mod select;
