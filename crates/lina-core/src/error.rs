//! Error types for lina operations.
//!
//! Almost everything in the lina crates is plain IEEE-754 arithmetic and
//! cannot fail: dividing by zero produces `inf`/`NaN` exactly as the
//! hardware dictates. The [`Error`] enum covers the handful of operations
//! with a genuine failure mode:
//!
//! - Constructing a value from a slice that is too short
//! - Strict normalization of a (near-)zero-length vector or quaternion
//! - Inverting a singular matrix
//! - Parsing a rounding-mode name
//!
//! # Usage
//!
//! ```rust
//! use lina_core::{Error, Result};
//!
//! fn checked_component(data: &[f32]) -> Result<f32> {
//!     if data.len() < 3 {
//!         return Err(Error::slice_too_short(3, data.len()));
//!     }
//!     Ok(data[2])
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lina operations.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// A slice passed to a `from_slice` constructor has too few elements.
    #[error("slice too short: need {expected} components, got {got}")]
    SliceTooShort {
        /// Component count the constructor requires
        expected: usize,
        /// Component count the slice actually holds
        got: usize,
    },

    /// Strict normalization was asked to normalize a zero-length value.
    ///
    /// The non-strict normalize variants return a zero vector instead of
    /// erroring; `try_normalize` reports the condition to the caller.
    #[error("cannot normalize a zero-length value")]
    ZeroLength,

    /// Matrix inversion failed because the matrix is singular.
    #[error("matrix is singular (determinant {det})")]
    Singular {
        /// Determinant that fell below the invertibility threshold
        det: f32,
    },

    /// A rounding-mode name did not match any [`crate::RoundMethod`].
    #[error("unknown rounding method: {name:?}")]
    UnknownRoundMethod {
        /// Name that failed to parse
        name: String,
    },
}

impl Error {
    /// Creates an [`Error::SliceTooShort`] error.
    #[inline]
    pub fn slice_too_short(expected: usize, got: usize) -> Self {
        Self::SliceTooShort { expected, got }
    }

    /// Creates an [`Error::Singular`] error.
    #[inline]
    pub fn singular(det: f32) -> Self {
        Self::Singular { det }
    }

    /// Creates an [`Error::UnknownRoundMethod`] error.
    #[inline]
    pub fn unknown_round_method(name: impl Into<String>) -> Self {
        Self::UnknownRoundMethod { name: name.into() }
    }

    /// Returns `true` if this is a degenerate-input error
    /// ([`ZeroLength`](Error::ZeroLength) or [`Singular`](Error::Singular)).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::ZeroLength | Self::Singular { .. })
    }
}
