//! Error types for sumar operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when dispatching an element-wise operation.
///
/// Both kinds are detected synchronously before any vectorized work or
/// output allocation happens, so there is never a partial result to
/// clean up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input length mismatch between the two operands.
    #[error("Shape mismatch: left operand has {left} elements, right operand has {right}")]
    ShapeMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// Element type is not one of the supported float widths, or the two
    /// operands' widths differ from each other.
    #[error("Unsupported element type: {0}")]
    UnsupportedType(String),
}
