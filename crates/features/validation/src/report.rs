use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;
use szflags_domain::FlagKind;
use szflags_domain::format::format_hex;

/// One disagreement between the legacy table, the catalog and the metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    /// A legacy constant whose symbolic counterpart does not exist.
    MissingFlag { constant: String, value: u64, expected: String },
    /// A legacy constant and its symbolic counterpart carry different values.
    ValueMismatch { constant: String, constant_value: u64, flag: String, flag_value: u64 },
    /// A catalog flag without a legacy constant.
    MissingConstant { flag: String, value: u64, expected: String },
    /// An `*_ALL_FLAGS` aggregate whose value is not the OR of its group's base flags.
    AllFlagsValue { group: String, aggregate: String, value: u64, expected: u64 },
    /// An `*_ALL_FLAGS` aggregate whose members are not exactly its group's base flags.
    AllFlagsMembers { group: String, aggregate: String, missing: Vec<String>, extra: Vec<String> },
    /// A flag lists a group that does not list it back, or the reverse.
    AsymmetricMembership { flag: String, group: String, detail: String },
    /// A metadata record naming no catalog flag.
    UnknownRecord { symbol: String },
    /// A catalog flag the metadata does not describe.
    MissingRecord { flag: String },
    RecordValue { symbol: String, metadata: u64, catalog: u64 },
    RecordGroups { symbol: String, metadata: Vec<String>, catalog: Vec<String> },
    RecordKind { symbol: String, metadata: FlagKind, catalog: FlagKind },
    RecordMembers { symbol: String, metadata: Vec<String>, catalog: Vec<String> },
}

impl Discrepancy {
    /// The constant, flag or record the discrepancy is about.
    #[must_use]
    pub fn subject(&self) -> &str {
        match self {
            Self::MissingFlag { constant, .. } | Self::ValueMismatch { constant, .. } => constant,
            Self::MissingConstant { flag, .. }
            | Self::AsymmetricMembership { flag, .. }
            | Self::MissingRecord { flag } => flag,
            Self::AllFlagsValue { aggregate, .. } | Self::AllFlagsMembers { aggregate, .. } => {
                aggregate
            },
            Self::UnknownRecord { symbol }
            | Self::RecordValue { symbol, .. }
            | Self::RecordGroups { symbol, .. }
            | Self::RecordKind { symbol, .. }
            | Self::RecordMembers { symbol, .. } => symbol,
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFlag { constant, value, expected } => write!(
                f,
                "constant {constant} = {} has no flag {expected}",
                format_hex(*value)
            ),
            Self::ValueMismatch { constant, constant_value, flag, flag_value } => write!(
                f,
                "constant {constant} = {} but flag {flag} = {}",
                format_hex(*constant_value),
                format_hex(*flag_value)
            ),
            Self::MissingConstant { flag, value, expected } => write!(
                f,
                "flag {flag} = {} has no constant {expected}",
                format_hex(*value)
            ),
            Self::AllFlagsValue { group, aggregate, value, expected } => write!(
                f,
                "aggregate {aggregate} = {} but the base flags of {group} OR to {}",
                format_hex(*value),
                format_hex(*expected)
            ),
            Self::AllFlagsMembers { group, aggregate, missing, extra } => write!(
                f,
                "aggregate {aggregate} differs from the base flags of {group} \
                 (missing: [{}], extra: [{}])",
                missing.join(", "),
                extra.join(", ")
            ),
            Self::AsymmetricMembership { flag, group, detail } => {
                write!(f, "flag {flag} and group {group} disagree: {detail}")
            },
            Self::UnknownRecord { symbol } => {
                write!(f, "metadata record {symbol} names no catalog flag")
            },
            Self::MissingRecord { flag } => write!(f, "flag {flag} has no metadata record"),
            Self::RecordValue { symbol, metadata, catalog } => write!(
                f,
                "{symbol}: metadata value {} but catalog value {}",
                format_hex(*metadata),
                format_hex(*catalog)
            ),
            Self::RecordGroups { symbol, metadata, catalog } => write!(
                f,
                "{symbol}: metadata groups [{}] but catalog groups [{}]",
                metadata.join(", "),
                catalog.join(", ")
            ),
            Self::RecordKind { symbol, metadata, catalog } => {
                write!(f, "{symbol}: metadata says {metadata} but catalog says {catalog}")
            },
            Self::RecordMembers { symbol, metadata, catalog } => write!(
                f,
                "{symbol}: metadata members [{}] but catalog members [{}]",
                metadata.join(", "),
                catalog.join(", ")
            ),
        }
    }
}

/// Every discrepancy found in one validation run, in the order checks produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    discrepancies: Vec<Discrepancy>,
}

impl ValidationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, discrepancy: Discrepancy) {
        self.discrepancies.push(discrepancy);
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.discrepancies.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Discrepancy> {
        self.discrepancies.iter()
    }

    /// Whether any discrepancy concerns `subject`.
    #[must_use]
    pub fn mentions(&self, subject: &str) -> bool {
        self.iter().any(|d| d.subject() == subject)
    }

    /// Turns a non-empty report into an error, for callers that refuse to start on one.
    ///
    /// # Errors
    /// [`ValidationError::Inconsistent`] listing every discrepancy.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_clean() {
            return Ok(());
        }
        Err(ValidationError::Inconsistent {
            count: self.len(),
            summary: self.to_string(),
            context: None,
        })
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return f.write_str("no discrepancies");
        }
        for (i, discrepancy) in self.discrepancies.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "- {discrepancy}")?;
        }
        Ok(())
    }
}

impl Extend<Discrepancy> for ValidationReport {
    fn extend<I: IntoIterator<Item = Discrepancy>>(&mut self, iter: I) {
        self.discrepancies.extend(iter);
    }
}

impl IntoIterator for ValidationReport {
    type Item = Discrepancy;
    type IntoIter = std::vec::IntoIter<Discrepancy>;

    fn into_iter(self) -> Self::IntoIter {
        self.discrepancies.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Discrepancy;
    type IntoIter = std::slice::Iter<'a, Discrepancy>;

    fn into_iter(self) -> Self::IntoIter {
        self.discrepancies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_full_width_hex() {
        let d = Discrepancy::ValueMismatch {
            constant: "SZ_FOO".into(),
            constant_value: 5,
            flag: "FOO".into(),
            flag_value: 4,
        };
        assert_eq!(
            d.to_string(),
            "constant SZ_FOO = 0x0000000000000005 but flag FOO = 0x0000000000000004"
        );
        assert_eq!(d.subject(), "SZ_FOO");
    }

    #[test]
    fn empty_report_is_ok() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert_eq!(report.to_string(), "no discrepancies");
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn non_empty_report_becomes_error() {
        let mut report = ValidationReport::new();
        report.push(Discrepancy::MissingRecord { flag: "A".into() });
        report.push(Discrepancy::UnknownRecord { symbol: "Z".into() });

        assert_eq!(report.len(), 2);
        assert!(report.mentions("Z"));

        let err = report.into_result().unwrap_err();
        let ValidationError::Inconsistent { count, ref summary, .. } = err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(count, 2);
        assert_eq!(
            summary,
            "- flag A has no metadata record\n- metadata record Z names no catalog flag"
        );
    }
}
