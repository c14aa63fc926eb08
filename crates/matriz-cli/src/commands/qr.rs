//! QR factorization command

use crate::error::{CliError, Result};
use colored::Colorize;
use matriz::analysis;
use matriz::decomposition::householder;
use std::path::Path;

/// QR command entry point: factorize a matrix file, print Q and R as JSON.
pub(crate) fn run(file: &Path, analyze: bool) -> Result<()> {
    let matrix = super::read_matrix(file)?;
    let qr = householder(&matrix);

    eprintln!(
        "{}",
        format!(
            "QR factorization completed for {} matrix",
            analysis::dimensions(&matrix)
        )
        .dimmed()
    );

    let mut body = serde_json::json!({
        "q": qr.q().to_rows(),
        "r": qr.r().to_rows(),
    });

    if analyze {
        let report = analysis::analyze(&qr);
        body["analysis"] =
            serde_json::to_value(&report).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&body).map_err(|e| CliError::InvalidInput(e.to_string()))?
    );

    Ok(())
}
