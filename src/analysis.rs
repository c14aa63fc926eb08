//! Post-hoc analysis of QR factorization results.
//!
//! Read-only checks on an existing [`QrDecomposition`]: orthogonality of Q
//! and upper-triangularity of R, reported against a single shared tolerance.

use crate::decomposition::QrDecomposition;
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// Numerical tolerance below which floating-point deviation is treated as
/// equality. Shared by the analysis checks and the verification logic in
/// tests; never duplicate this constant ad hoc.
pub const TOLERANCE: f64 = 1e-10;

/// Derived summary of a QR factorization's properties.
///
/// Computed on demand by [`analyze`]; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrReport {
    /// Dimensions of Q as "RxC".
    pub q_dimensions: String,
    /// Dimensions of R as "RxC".
    pub r_dimensions: String,
    /// Whether Q^T * Q is the identity within [`TOLERANCE`].
    pub is_q_orthogonal: bool,
    /// Whether R is zero below the main diagonal within [`TOLERANCE`].
    pub is_r_upper_triangular: bool,
}

/// Analyzes the properties of a QR factorization.
#[must_use]
pub fn analyze(qr: &QrDecomposition) -> QrReport {
    QrReport {
        q_dimensions: dimensions(qr.q()),
        r_dimensions: dimensions(qr.r()),
        is_q_orthogonal: is_orthogonal(qr.q()),
        is_r_upper_triangular: is_upper_triangular(qr.r()),
    }
}

/// Formats a matrix's dimensions as "RxC".
#[must_use]
pub fn dimensions(matrix: &Matrix<f64>) -> String {
    let (rows, cols) = matrix.shape();
    format!("{rows}x{cols}")
}

/// Checks whether a matrix is orthogonal (Q^T * Q = I within [`TOLERANCE`]).
///
/// Only square matrices can be orthogonal; a non-square input reports false.
#[must_use]
pub fn is_orthogonal(matrix: &Matrix<f64>) -> bool {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return false;
    }

    for i in 0..cols {
        for j in 0..cols {
            let dot = matrix.column(i).dot(&matrix.column(j));
            let expected = if i == j { 1.0 } else { 0.0 };
            if (dot - expected).abs() > TOLERANCE {
                return false;
            }
        }
    }

    true
}

/// Checks whether every entry strictly below the main diagonal is zero
/// within [`TOLERANCE`]. An empty matrix is vacuously triangular.
#[must_use]
pub fn is_upper_triangular(matrix: &Matrix<f64>) -> bool {
    let (rows, cols) = matrix.shape();

    for i in 0..rows {
        for j in 0..cols.min(i) {
            if matrix.get(i, j).abs() > TOLERANCE {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
