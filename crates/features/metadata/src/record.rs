//! One entry of the metadata description and the rules that classify it.

use crate::error::MetadataError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use szflags_domain::FlagKind;
use szflags_domain::format::parse_mask;

/// How a flag's value was written by the metadata author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Definition {
    /// A bit-shift expression such as `1 << 12`.
    Expression(String),
    /// The symbols the flag is composed of (or an alias of).
    Symbols(Vec<String>),
}

impl Default for Definition {
    fn default() -> Self {
        Self::Symbols(Vec::new())
    }
}

impl Definition {
    /// Symbols referenced by the definition; identifiers inside an expression count too.
    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        match self {
            Self::Symbols(symbols) => symbols.iter().map(String::as_str).collect(),
            Self::Expression(expression) => expression
                .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .filter(|token| token.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_'))
                .collect(),
        }
    }
}

/// A `value` field: a JSON number or a decimal, `0x` or `0b` string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Unsigned(u64),
    /// Legacy signed encoding of values with bit 63 set.
    Signed(i64),
    Text(String),
}

/// The record exactly as it appears in the source.
///
/// Optional fields may be absent or `null`; keys this loader does not know are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawRecord {
    symbol: String,
    bits: Vec<u32>,
    value: RawValue,
    #[serde(default)]
    definition: Option<Definition>,
    #[serde(default)]
    groups: Option<Vec<String>>,
    #[serde(default)]
    flags: Option<Vec<String>>,
}

/// A validated, classified metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    pub symbol: String,
    pub bits: BTreeSet<u32>,
    pub value: u64,
    pub definition: Definition,
    /// Groups in source order, without repeats.
    pub groups: Vec<String>,
    /// The explicit sub-flag list, when the record carries one.
    pub flags: Option<Vec<String>>,
    pub kind: FlagKind,
}

impl MetadataRecord {
    #[must_use]
    pub fn is_aggregate(&self) -> bool {
        self.kind == FlagKind::Aggregate
    }

    /// The explicit sub-flags, empty when the record has none.
    #[must_use]
    pub fn sub_flags(&self) -> &[String] {
        self.flags.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|own| own == group)
    }
}

impl RawRecord {
    pub(crate) fn symbol(&self) -> &str {
        &self.symbol
    }

    pub(crate) fn sub_flags(&self) -> &[String] {
        self.flags.as_deref().unwrap_or_default()
    }

    /// Checks the record on its own and decides whether it is a base flag or an aggregate.
    pub(crate) fn into_record(self, index: usize) -> Result<MetadataRecord, MetadataError> {
        let value = self.parse_value(index)?;

        let mut bits_mask = 0_u64;
        for &bit in &self.bits {
            if bit >= u64::BITS {
                return Err(MetadataError::BitOutOfRange {
                    index,
                    symbol: self.symbol,
                    bit,
                    context: None,
                });
            }
            bits_mask |= 1 << bit;
        }
        if bits_mask != value {
            return Err(MetadataError::ValueMismatch {
                index,
                symbol: self.symbol,
                bits_mask,
                value,
                context: None,
            });
        }

        let source_groups = self.groups.unwrap_or_default();
        let mut groups: Vec<String> = Vec::with_capacity(source_groups.len());
        for group in source_groups {
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        let bits: BTreeSet<u32> = self.bits.into_iter().collect();

        let definition = self.definition.unwrap_or_default();
        let Some(kind) = classify(self.flags.is_some(), &definition, &bits, value, &groups) else {
            return Err(MetadataError::Unclassifiable { index, symbol: self.symbol, context: None });
        };

        Ok(MetadataRecord {
            symbol: self.symbol,
            bits,
            value,
            definition,
            groups,
            flags: self.flags,
            kind,
        })
    }

    fn parse_value(&self, index: usize) -> Result<u64, MetadataError> {
        match &self.value {
            RawValue::Unsigned(value) => Ok(*value),
            RawValue::Signed(value) => Ok(value.cast_unsigned()),
            RawValue::Text(text) => parse_mask(text).map_err(|_| MetadataError::InvalidValue {
                index,
                symbol: self.symbol.clone(),
                text: text.clone(),
                context: None,
            }),
        }
    }
}

/// Decides the kind of a record, `None` when the shape fits neither.
///
/// In order: an explicit `flags` list makes an aggregate; so does a zero value
/// defined by exactly one symbol in exactly one group (the per-group defaults that
/// alias `SZ_NO_FLAGS`); a single bit whose value is that bit makes a base flag,
/// including aliases defined by another symbol.
fn classify(
    has_flags: bool,
    definition: &Definition,
    bits: &BTreeSet<u32>,
    value: u64,
    groups: &[String],
) -> Option<FlagKind> {
    if has_flags {
        return Some(FlagKind::Aggregate);
    }
    if value == 0 && groups.len() == 1 && definition.symbols().len() == 1 {
        return Some(FlagKind::Aggregate);
    }
    let single_bit = bits.len() == 1 && bits.first().is_some_and(|&bit| value == 1 << bit);
    single_bit.then_some(FlagKind::Base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn expression_symbols_skip_numbers() {
        assert!(Definition::Expression("1 << 12".into()).symbols().is_empty());
        assert_eq!(Definition::Expression("SZ_NO_FLAGS".into()).symbols(), ["SZ_NO_FLAGS"]);
        assert_eq!(Definition::Expression("SZ_A | SZ_B".into()).symbols(), ["SZ_A", "SZ_B"]);
    }

    #[test]
    fn value_accepts_numbers_and_prefixed_strings() {
        let hex = raw(r#"{"symbol":"W","bits":[62],"value":"0x4000000000000000","groups":["G"]}"#);
        assert_eq!(hex.into_record(0).unwrap().value, 1 << 62);

        let bin = raw(r#"{"symbol":"B","bits":[2],"value":"0b100","groups":["G"]}"#);
        assert_eq!(bin.into_record(0).unwrap().value, 4);

        let signed = raw(r#"{"symbol":"S","bits":[63],"value":-9223372036854775808,"groups":["G"]}"#);
        assert_eq!(signed.into_record(0).unwrap().value, 1 << 63);

        let bad = raw(r#"{"symbol":"X","bits":[0],"value":"one","groups":["G"]}"#);
        assert!(matches!(bad.into_record(3), Err(MetadataError::InvalidValue { index: 3, .. })));
    }

    #[test]
    fn classification_rules() {
        let base = raw(r#"{"symbol":"X","bits":[0],"value":1,"definition":"1 << 0","groups":["G1"]}"#);
        assert_eq!(base.into_record(0).unwrap().kind, FlagKind::Base);

        let alias = raw(r#"{"symbol":"Y","bits":[0],"value":1,"definition":["X"],"groups":["G2"]}"#);
        assert_eq!(alias.into_record(0).unwrap().kind, FlagKind::Base);

        let zero_default =
            raw(r#"{"symbol":"D","bits":[],"value":0,"definition":["NONE"],"groups":["G1"]}"#);
        assert_eq!(zero_default.into_record(0).unwrap().kind, FlagKind::Aggregate);

        let explicit =
            raw(r#"{"symbol":"A","bits":[0,1],"value":3,"groups":["G1"],"flags":["X","Z"]}"#);
        assert_eq!(explicit.into_record(0).unwrap().kind, FlagKind::Aggregate);
    }

    #[test]
    fn ambiguous_shape_is_rejected() {
        let multi = raw(r#"{"symbol":"M","bits":[0,1],"value":3,"groups":["G1"]}"#);
        assert!(matches!(multi.into_record(7), Err(MetadataError::Unclassifiable { index: 7, .. })));

        let zero_two_groups =
            raw(r#"{"symbol":"Z","bits":[],"value":0,"definition":["N"],"groups":["G1","G2"]}"#);
        assert!(matches!(zero_two_groups.into_record(0), Err(MetadataError::Unclassifiable { .. })));
    }

    #[test]
    fn bits_must_match_value() {
        let wrong = raw(r#"{"symbol":"W","bits":[1],"value":1,"groups":["G"]}"#);
        assert!(matches!(
            wrong.into_record(0),
            Err(MetadataError::ValueMismatch { bits_mask: 2, value: 1, .. })
        ));

        let wide = raw(r#"{"symbol":"W","bits":[64],"value":0,"groups":["G"]}"#);
        assert!(matches!(wide.into_record(0), Err(MetadataError::BitOutOfRange { bit: 64, .. })));
    }

    #[test]
    fn null_optionals_and_extra_keys_are_tolerated() {
        let record = raw(
            r#"{"symbol":"X","bits":[0],"value":1,"definition":null,"groups":null,
                "flags":null,"description":"include resolved entities"}"#,
        )
        .into_record(0)
        .unwrap();
        assert_eq!(record.kind, FlagKind::Base);
        assert!(record.groups.is_empty());
        assert_eq!(record.definition, Definition::default());
        assert!(record.flags.is_none());
    }

    #[test]
    fn repeated_groups_collapse() {
        let record = raw(r#"{"symbol":"X","bits":[0],"value":1,"groups":["G1","G2","G1"]}"#)
            .into_record(0)
            .unwrap();
        assert_eq!(record.groups, ["G1", "G2"]);
        assert!(record.in_group("G2"));
        assert!(record.sub_flags().is_empty());
    }
}
