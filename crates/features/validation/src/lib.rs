//! # Flag Cross-Validation
//!
//! Guards the consistency of the three representations of the flag set: the legacy
//! constant table ([`SzFlags`](szflags_domain::SzFlags)), the symbolic catalog and
//! the metadata description. Findings are collected into a [`ValidationReport`]
//! rather than raised, so one run shows every problem at once.
//!
//! ```rust
//! use szflags_validation::validate_standard;
//! use szflags_domain::config::ValidationConfig;
//!
//! let report = validate_standard(&ValidationConfig::default()).unwrap();
//! assert!(report.is_clean(), "{report}");
//! ```

mod error;
mod report;
pub mod validator;

pub use crate::error::{ValidationError, ValidationErrorExt};
pub use crate::report::{Discrepancy, ValidationReport};
pub use crate::validator::CrossValidator;

use szflags_domain::config::ValidationConfig;
use szflags_domain::standard;
use szflags_metadata::MetadataModel;

/// Validates the standard catalog and legacy table against `metadata`.
#[must_use]
pub fn validate_with(metadata: &MetadataModel, config: &ValidationConfig) -> ValidationReport {
    CrossValidator::new(standard::catalog())
        .constants(standard::legacy_constants())
        .metadata(metadata)
        .config(config)
        .validate()
}

/// Validates the standard catalog and legacy table against the bundled metadata.
///
/// # Errors
/// [`ValidationError::Metadata`] if the bundled metadata cannot be loaded.
pub fn validate_standard(config: &ValidationConfig) -> Result<ValidationReport, ValidationError> {
    let metadata = szflags_metadata::standard().context("Bundled metadata")?;
    Ok(validate_with(metadata, config))
}
