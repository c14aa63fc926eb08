//! Validation of untrusted matrix input.
//!
//! Runs before any other component touches the data. Downstream routines
//! assume a validated matrix and only `debug_assert!` their preconditions.

use crate::error::MatrizError;

/// Checks that nested rows form a non-empty rectangular matrix of finite
/// values.
///
/// # Errors
///
/// - [`MatrizError::EmptyMatrix`] if there are zero rows or the first row
///   has zero columns.
/// - [`MatrizError::IrregularRows`] if any row's length differs from the
///   first row's length.
/// - [`MatrizError::NonFiniteValue`] if any entry is NaN or infinite.
pub fn check(rows: &[Vec<f64>]) -> Result<(), MatrizError> {
    if rows.is_empty() || rows[0].is_empty() {
        return Err(MatrizError::EmptyMatrix);
    }

    let cols = rows[0].len();

    for (i, row) in rows.iter().enumerate() {
        if row.len() != cols {
            return Err(MatrizError::IrregularRows {
                row: i,
                expected: cols,
                found: row.len(),
            });
        }

        for (j, val) in row.iter().enumerate() {
            if !val.is_finite() {
                return Err(MatrizError::NonFiniteValue { row: i, col: j });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
