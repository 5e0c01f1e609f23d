//! Error types for polythin operations.

use thiserror::Error;

/// Errors that can occur when configuring or checking a simplification.
///
/// The algorithms themselves are total over well-formed input; errors are
/// only raised by eager parameter validation, before any point is read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimplifyError {
    /// A tolerance was negative or not a number.
    #[error("invalid tolerance `{name}`: {value} (must be a non-negative number)")]
    InvalidTolerance {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value, widened to `f64`.
        value: f64,
    },

    /// The multi-pass repeat count was not greater than one.
    #[error("invalid repeat count {repeat}: multi-pass simplification needs at least 2 passes")]
    InvalidRepeat {
        /// The rejected repeat count.
        repeat: usize,
    },

    /// A simplified polyline is not an endpoint-preserving subsequence of its original.
    #[error("simplified polyline is not an endpoint-preserving subsequence of the original")]
    NotASubsequence,
}
