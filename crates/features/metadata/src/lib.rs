//! # Flag Metadata
//!
//! Loads the declarative description of every flag (bit positions, value, how it was
//! defined, the usage groups it belongs to and, for aggregates, its sub-flags) and
//! exposes it through read-only indices for cross-checking against the catalog.
//!
//! ## Source format
//!
//! A JSON array of records:
//!
//! ```json
//! [
//!   { "symbol": "SZ_WITH_INFO", "bits": [62], "value": "0x4000000000000000",
//!     "definition": "1 << 62", "groups": ["SZ_ADD_RECORD_FLAGS"] },
//!   { "symbol": "SZ_ADD_RECORD_ALL_FLAGS", "bits": [62], "value": "0x4000000000000000",
//!     "definition": ["SZ_WITH_INFO"], "groups": ["SZ_ADD_RECORD_FLAGS"],
//!     "flags": ["SZ_WITH_INFO"] }
//! ]
//! ```
//!
//! `symbol`, `bits` and `value` are mandatory; `value` is a number or a decimal,
//! `0x` or `0b` string. Each record is classified as a base flag or an aggregate
//! on load, and a record that fits neither shape fails the load.
//!
//! ```rust
//! use szflags_metadata::load;
//!
//! let model = load(r#"[
//!     { "symbol": "X", "bits": [0], "value": 1, "definition": "1 << 0", "groups": ["G1"] },
//!     { "symbol": "A", "bits": [1], "value": 2, "definition": "1 << 1", "groups": ["G1"] },
//!     { "symbol": "Y", "bits": [0, 1], "value": 3, "groups": ["G1"], "flags": ["X", "A"] }
//! ]"#).unwrap();
//!
//! assert!(model.record("Y").unwrap().is_aggregate());
//! assert_eq!(model.base_flags_by_group()["G1"].len(), 2);
//! ```

mod error;
mod model;
mod record;

pub use crate::error::{MetadataError, MetadataErrorExt};
pub use crate::model::{GroupIndex, MetadataModel, RecordIndex};
pub use crate::record::{Definition, MetadataRecord};

use crate::record::RawRecord;
use fxhash::FxHashSet;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// The metadata shipped with the crate, describing the standard catalog.
pub const BUNDLED_METADATA: &str = include_str!("../data/szflags.json");

static STANDARD: OnceLock<MetadataModel> = OnceLock::new();

/// Parses a metadata source and builds its indices.
///
/// # Errors
/// * [`MetadataError::Json`] if the source is not a JSON array.
/// * [`MetadataError::MalformedRecord`] if a record misses a mandatory field.
/// * A record-level variant naming the record for duplicate symbols, out-of-range
///   bits, bits that disagree with the value, unknown sub-flags, a shape that is
///   neither base nor aggregate, or an aggregate whose value is not its sub-flags' OR.
pub fn load(source: &str) -> Result<MetadataModel, MetadataError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(source).context("Metadata must be a JSON array of records")?;

    let mut raw = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let record: RawRecord = serde_json::from_value(value).map_err(|err| {
            MetadataError::MalformedRecord { index, reason: err.to_string(), context: None }
        })?;
        raw.push(record);
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for (index, record) in raw.iter().enumerate() {
        if !seen.insert(record.symbol()) {
            return Err(MetadataError::DuplicateSymbol {
                index,
                symbol: record.symbol().to_owned(),
                context: None,
            });
        }
    }
    for (index, record) in raw.iter().enumerate() {
        if let Some(unknown) = record.sub_flags().iter().find(|s| !seen.contains(s.as_str())) {
            return Err(MetadataError::UnknownSubFlag {
                index,
                symbol: record.symbol().to_owned(),
                flag: unknown.clone(),
                context: None,
            });
        }
    }

    let records = raw
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_record(index))
        .collect::<Result<Vec<_>, _>>()?;

    let model = MetadataModel::from_records(records);
    check_aggregate_values(&model)?;
    debug!(
        records = model.len(),
        base = model.base_flags_by_name().len(),
        aggregates = model.aggregate_flags_by_name().len(),
        groups = model.flags_by_group().len(),
        "Metadata indices built"
    );
    Ok(model)
}

/// An explicit `flags` list fixes the aggregate's value: the OR of its flattened base members.
fn check_aggregate_values(model: &MetadataModel) -> Result<(), MetadataError> {
    for (index, record) in model.records().enumerate() {
        if record.flags.is_none() {
            continue;
        }
        let expected = model
            .flattened_sub_flags(&record.symbol)
            .into_iter()
            .filter_map(|symbol| model.record(symbol))
            .fold(0, |mask, member| mask | member.value);
        if expected != record.value {
            return Err(MetadataError::AggregateValueMismatch {
                index,
                symbol: record.symbol.clone(),
                expected,
                value: record.value,
                context: None,
            });
        }
    }
    Ok(())
}

/// Reads and parses a metadata file. One synchronous read, no retries.
///
/// # Errors
/// [`MetadataError::Io`] when the file cannot be read, otherwise as [`load`].
pub fn load_file(path: impl AsRef<Path>) -> Result<MetadataModel, MetadataError> {
    let path = path.as_ref();
    info!("Loading flag metadata from {}", path.display());

    let source = std::fs::read_to_string(path)
        .context(format!("Failed to read metadata file {}", path.display()))?;
    load(&source)
}

/// The bundled metadata, parsed on first use and cached for the process.
///
/// # Errors
/// As [`load`], if the bundled source is inconsistent.
pub fn standard() -> Result<&'static MetadataModel, MetadataError> {
    if let Some(model) = STANDARD.get() {
        return Ok(model);
    }
    let model = load(BUNDLED_METADATA).context("Bundled metadata")?;
    Ok(STANDARD.get_or_init(|| model))
}
