use anyhow::{Context, Result};
use std::path::Path;
use szflags::domain::config::ValidationConfig;
use szflags::validation::{ValidationReport, validate_with};

/// Cross-checks the legacy table and the catalog against the metadata at `path`, or
/// the bundled metadata when no path is given, and prints the report.
///
/// # Errors
/// Returns an error if the metadata cannot be loaded. Discrepancies are not errors;
/// they are returned in the report.
pub fn run(path: Option<&Path>, config: &ValidationConfig) -> Result<ValidationReport> {
    let report = match path {
        Some(path) => {
            let metadata = szflags::metadata::load_file(path)
                .with_context(|| format!("Cannot validate against {}", path.display()))?;
            validate_with(&metadata, config)
        },
        None => {
            let metadata =
                szflags::metadata::standard().context("Cannot load the bundled metadata")?;
            validate_with(metadata, config)
        },
    };

    if report.is_clean() {
        println!("OK: no discrepancies");
    } else {
        println!("{} discrepancies:", report.len());
        println!("{report}");
    }

    Ok(report)
}
