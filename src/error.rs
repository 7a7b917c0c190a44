//! Typed errors shared by every compute kernel and the dispatch boundary.
//!
//! There are exactly two error kinds:
//!
//! - [`ComputeError::InvalidArgument`]: the caller violated a documented
//!   precondition (negative rotation offset, rank out of bounds, empty
//!   selection input, empty or ragged grid). Always names the field that
//!   failed so callers can map it to their own reporting.
//! - [`ComputeError::Internal`]: any failure not attributable to caller
//!   input. Nothing in the crate produces it during normal operation; it
//!   exists as the catch-all boundary contract and must not be retried.
//!
//! Both kinds are raised before any mutation or traversal begins, so a
//! rejected request leaves its input untouched.
//!
//! # Examples
//!
//! ```rust
//! use seqgrid::error::ComputeError;
//!
//! let error = ComputeError::invalid_argument("rank", "must be at least 1");
//! assert!(error.is_invalid_argument());
//! assert_eq!(
//!     error.to_string(),
//!     "invalid argument `rank`: must be at least 1"
//! );
//! ```

use thiserror::Error;

// =============================================================================
// ComputeError
// =============================================================================

/// Error contract for the three compute operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComputeError {
    /// A precondition on the request was violated. `field` identifies the
    /// offending input; `reason` says what was expected.
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// Name of the request field that failed validation.
        field: String,
        /// Human-readable description of the violated precondition.
        reason: String,
    },

    /// A failure not attributable to caller input. Indicates a bug, not a
    /// data problem.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the unexpected failure.
        message: String,
    },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl ComputeError {
    /// Creates an invalid-argument error naming the failing field.
    #[must_use]
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a [`ComputeError::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns the failing field name for validation errors, `None` for
    /// internal errors.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(field),
            Self::Internal { .. } => None,
        }
    }
}
