//! Householder QR factorization.
//!
//! Classical Householder reduction: for each leading column a reflector
//! zeroes the subdiagonal entries, the reflectors are accumulated into an
//! orthogonal Q, and the working matrix becomes R. Plain nested loops with a
//! fixed summation order keep the result reproducible across runs.

use crate::primitives::Matrix;

/// Result of a QR factorization: Q (RxR, orthogonal) and R (RxC,
/// upper-triangular in its leading square block) with Q * R equal to the
/// input within floating-point tolerance.
///
/// # Examples
///
/// ```
/// use matriz::decomposition::householder;
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("valid matrix");
/// let qr = householder(&m);
/// assert_eq!(qr.q().shape(), (2, 2));
/// assert_eq!(qr.r().shape(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition {
    q: Matrix<f64>,
    r: Matrix<f64>,
}

impl QrDecomposition {
    /// The orthogonal factor Q.
    #[must_use]
    pub fn q(&self) -> &Matrix<f64> {
        &self.q
    }

    /// The upper-triangular factor R.
    #[must_use]
    pub fn r(&self) -> &Matrix<f64> {
        &self.r
    }

    /// Consumes the decomposition, returning (Q, R).
    #[must_use]
    pub fn into_parts(self) -> (Matrix<f64>, Matrix<f64>) {
        (self.q, self.r)
    }

    /// Recomputes Q * R, for verifying the factorization.
    #[must_use]
    pub fn reconstruct(&self) -> Matrix<f64> {
        self.q
            .matmul(&self.r)
            .expect("Q is RxR and R is RxC, dimensions agree by construction")
    }
}

/// Factorizes a matrix into Q * R using Householder reflections.
///
/// Valid for any RxC matrix with R >= 1 and C >= 1, including wide (C > R)
/// and rank-deficient inputs: a zero subcolumn simply skips its reflector,
/// yielding one of the (non-unique) valid decompositions. Single-row and
/// single-column matrices are ordinary degenerate cases, not errors.
///
/// The input must already have passed [`crate::validate::check`]; this
/// routine introduces no error path of its own.
#[must_use]
pub fn householder(matrix: &Matrix<f64>) -> QrDecomposition {
    debug_assert!(
        matrix.as_slice().iter().all(|v| v.is_finite()),
        "householder requires a validated matrix"
    );

    let (rows, cols) = matrix.shape();
    let mut q = Matrix::eye(rows);
    let mut r = matrix.clone();

    for k in 0..rows.min(cols) {
        let v = match reflector(&r, k) {
            Some(v) => v,
            None => continue,
        };

        apply_to_working(&mut r, &v, k);
        accumulate(&mut q, &v, k);
    }

    QrDecomposition { q, r }
}

/// Builds the unit Householder vector that zeroes column `k` below the
/// diagonal, or None when the subcolumn is already zero.
///
/// The pivot's reflection target is chosen with the opposite sign of the
/// pivot so the subtraction never cancels.
fn reflector(r: &Matrix<f64>, k: usize) -> Option<Vec<f64>> {
    let rows = r.n_rows();
    let mut v: Vec<f64> = (k..rows).map(|i| r.get(i, k)).collect();

    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm == 0.0 {
        return None;
    }

    let alpha = -v[0].signum() * norm;
    v[0] -= alpha;

    let v_norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if v_norm == 0.0 {
        return None;
    }
    for x in &mut v {
        *x /= v_norm;
    }

    Some(v)
}

/// Applies H = I - 2vv^T to the working matrix rows k.., zeroing the
/// subdiagonal of column k.
fn apply_to_working(r: &mut Matrix<f64>, v: &[f64], k: usize) {
    let (rows, cols) = r.shape();

    // Columns before k already have zeroed subcolumns; the reflector leaves
    // them unchanged.
    for j in k..cols {
        let mut dot = 0.0;
        for (t, &vt) in v.iter().enumerate() {
            dot += vt * r.get(k + t, j);
        }
        for (t, &vt) in v.iter().enumerate() {
            let updated = r.get(k + t, j) - 2.0 * dot * vt;
            r.set(k + t, j, updated);
        }
    }

    // The reflector zeroes these entries mathematically; store them exactly.
    for i in (k + 1)..rows {
        r.set(i, k, 0.0);
    }
}

/// Accumulates Q <- Q * H with H = I - 2vv^T embedded at rows/cols k...
fn accumulate(q: &mut Matrix<f64>, v: &[f64], k: usize) {
    let rows = q.n_rows();

    for i in 0..rows {
        let mut dot = 0.0;
        for (t, &vt) in v.iter().enumerate() {
            dot += vt * q.get(i, k + t);
        }
        for (t, &vt) in v.iter().enumerate() {
            let updated = q.get(i, k + t) - 2.0 * dot * vt;
            q.set(i, k + t, updated);
        }
    }
}

#[cfg(test)]
#[path = "qr_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "qr_proptests.rs"]
mod proptests;
