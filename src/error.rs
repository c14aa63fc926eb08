//! Error types for Matriz operations.
//!
//! Every failure the library can produce is a validation failure: the
//! algorithms themselves have no error path once their input has been
//! accepted.

use std::fmt;

/// Main error type for Matriz operations.
///
/// Each variant corresponds to one stable reason code (see [`code`]) so that
/// callers routing errors over a wire can switch on the code while showing
/// the `Display` message to humans.
///
/// [`code`]: MatrizError::code
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::IrregularRows { row: 1, expected: 2, found: 1 };
/// assert_eq!(err.code(), "irregular-rows");
/// assert!(err.to_string().contains("rectangular"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// Matrix has zero rows, or its first row has zero columns.
    EmptyMatrix,

    /// A row's length differs from the first row's length.
    IrregularRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length found at `row`
        found: usize,
    },

    /// An entry is NaN or infinite.
    NonFiniteValue {
        /// Row index of the offending entry
        row: usize,
        /// Column index of the offending entry
        col: usize,
    },

    /// Rotation direction string is neither "left" nor "right".
    BadDirection {
        /// The rejected value
        value: String,
    },
}

impl MatrizError {
    /// Stable machine-readable reason code for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            MatrizError::EmptyMatrix => "empty",
            MatrizError::IrregularRows { .. } => "irregular-rows",
            MatrizError::NonFiniteValue { .. } => "non-finite-value",
            MatrizError::BadDirection { .. } => "bad-direction",
        }
    }
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::EmptyMatrix => {
                write!(f, "matrix is required and cannot be empty")
            }
            MatrizError::IrregularRows {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "matrix must be rectangular (all rows same length): row {row} has {found} columns, expected {expected}"
                )
            }
            MatrizError::NonFiniteValue { row, col } => {
                write!(
                    f,
                    "matrix contains invalid values (NaN or Inf) at [{row}][{col}]"
                )
            }
            MatrizError::BadDirection { value } => {
                write!(f, "direction must be 'left' or 'right', got '{value}'")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
