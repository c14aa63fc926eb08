//! Command implementations

pub(crate) mod qr;
pub(crate) mod rotate;
pub(crate) mod serve;

use crate::error::{CliError, Result};
use matriz::primitives::Matrix;
use std::path::Path;

/// Reads a matrix from a JSON file containing an array of rows.
pub(crate) fn read_matrix(file: &Path) -> Result<Matrix<f64>> {
    if !file.exists() {
        return Err(CliError::FileNotFound(file.to_path_buf()));
    }

    let text = std::fs::read_to_string(file)?;
    let rows: Vec<Vec<f64>> =
        serde_json::from_str(&text).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    Ok(Matrix::from_rows(&rows)?)
}
