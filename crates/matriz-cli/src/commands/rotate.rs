//! Matrix rotation command

use crate::error::{CliError, Result};
use colored::Colorize;
use matriz::analysis;
use matriz::rotation::{rotate, Direction};
use std::path::Path;

/// Rotate command entry point: rotate a matrix file 90 degrees, print JSON.
pub(crate) fn run(file: &Path, direction: &str) -> Result<()> {
    let direction: Direction = direction
        .parse()
        .map_err(|e: matriz::error::MatrizError| CliError::ValidationFailed(e.to_string()))?;

    let matrix = super::read_matrix(file)?;
    let rotated = rotate(&matrix, direction);

    eprintln!(
        "{}",
        format!(
            "Matrix rotated {}: {} -> {}",
            direction,
            analysis::dimensions(&matrix),
            analysis::dimensions(&rotated)
        )
        .dimmed()
    );

    let body = serde_json::json!({ "rotated": rotated.to_rows() });
    println!(
        "{}",
        serde_json::to_string_pretty(&body).map_err(|e| CliError::InvalidInput(e.to_string()))?
    );

    Ok(())
}
