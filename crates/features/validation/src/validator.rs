//! # Cross-Validation
//!
//! The same flag information lives in three places that are maintained separately:
//! the legacy constant table, the symbolic [`Catalog`] and the metadata description.
//! [`CrossValidator`] reads all three and reports every place they disagree.
//!
//! Checks, in report order:
//! 1. **Legacy constants**: each constant under the legacy prefix has a flag named
//!    `symbolic_prefix + suffix` with the same value.
//! 2. **Missing constants**: each flag under the symbolic prefix has such a constant.
//! 3. **`*_ALL_FLAGS` aggregates**: value and members equal the group's base flags.
//! 4. **Group symmetry**: flag → group and group → flag agree.
//! 5. **Metadata** (when supplied): records and flags match one to one.

use crate::report::{Discrepancy, ValidationReport};
use std::borrow::Cow;
use std::collections::BTreeSet;
use szflags_domain::config::ValidationConfig;
use szflags_domain::group::ALL_FLAGS_SUFFIX;
use szflags_domain::{Catalog, FlagKind};
use szflags_metadata::MetadataModel;
use tracing::{debug, info, warn};

/// Read-only comparison of the legacy table, a catalog and optional metadata.
#[derive(Debug, Clone)]
pub struct CrossValidator<'a> {
    catalog: &'a Catalog,
    constants: Vec<(Cow<'a, str>, u64)>,
    metadata: Option<&'a MetadataModel>,
    legacy_prefix: Cow<'a, str>,
    symbolic_prefix: Cow<'a, str>,
}

impl<'a> CrossValidator<'a> {
    /// A validator with no constants, no metadata and the default `SZ_` prefixes.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        let defaults = ValidationConfig::default();
        Self {
            catalog,
            constants: Vec::new(),
            metadata: None,
            legacy_prefix: Cow::Owned(defaults.legacy_prefix),
            symbolic_prefix: Cow::Owned(defaults.symbolic_prefix),
        }
    }

    #[must_use]
    pub fn constants<I, S>(mut self, constants: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<Cow<'a, str>>,
    {
        self.constants = constants.into_iter().map(|(name, value)| (name.into(), value)).collect();
        self
    }

    #[must_use]
    pub const fn metadata(mut self, metadata: &'a MetadataModel) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn prefixes(mut self, legacy: &'a str, symbolic: &'a str) -> Self {
        self.legacy_prefix = Cow::Borrowed(legacy);
        self.symbolic_prefix = Cow::Borrowed(symbolic);
        self
    }

    #[must_use]
    pub fn config(self, config: &'a ValidationConfig) -> Self {
        self.prefixes(&config.legacy_prefix, &config.symbolic_prefix)
    }

    /// Runs every check and collects the findings.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        self.check_legacy_constants(&mut report);
        self.check_missing_constants(&mut report);
        self.check_all_flags_aggregates(&mut report);
        self.check_group_symmetry(&mut report);
        if let Some(metadata) = self.metadata {
            self.check_metadata(metadata, &mut report);
        }

        if report.is_clean() {
            info!(
                constants = self.constants.len(),
                flags = self.catalog.flags().len(),
                metadata = self.metadata.map_or(0, MetadataModel::len),
                "Flag representations are consistent"
            );
        } else {
            for discrepancy in &report {
                warn!(subject = discrepancy.subject(), "{discrepancy}");
            }
            warn!(count = report.len(), "Flag representations disagree");
        }
        report
    }

    /// Every constant under the legacy prefix maps to a flag with the same value.
    /// Constants outside the prefix are ignored.
    pub fn check_legacy_constants(&self, report: &mut ValidationReport) {
        for (constant, value) in &self.constants {
            let Some(suffix) = constant.strip_prefix(self.legacy_prefix.as_ref()) else {
                continue;
            };
            let expected = format!("{}{suffix}", self.symbolic_prefix);
            match self.catalog.flag(&expected) {
                None => report.push(Discrepancy::MissingFlag {
                    constant: constant.to_string(),
                    value: *value,
                    expected,
                }),
                Some(flag) if flag.to_mask() != *value => report.push(Discrepancy::ValueMismatch {
                    constant: constant.to_string(),
                    constant_value: *value,
                    flag: expected,
                    flag_value: flag.to_mask(),
                }),
                Some(_) => {},
            }
        }
        debug!(constants = self.constants.len(), "Legacy constants checked");
    }

    /// Every flag under the symbolic prefix has a legacy constant.
    pub fn check_missing_constants(&self, report: &mut ValidationReport) {
        let names: BTreeSet<&str> = self.constants.iter().map(|(name, _)| name.as_ref()).collect();
        for flag in self.catalog.flags() {
            let Some(suffix) = flag.name().strip_prefix(self.symbolic_prefix.as_ref()) else {
                continue;
            };
            let expected = format!("{}{suffix}", self.legacy_prefix);
            if !names.contains(expected.as_str()) {
                report.push(Discrepancy::MissingConstant {
                    flag: flag.name().to_owned(),
                    value: flag.to_mask(),
                    expected,
                });
            }
        }
    }

    /// Each group's `*_ALL_FLAGS` aggregate equals the group's base flags, by value
    /// and by membership. Equal masks over different sets are still reported.
    pub fn check_all_flags_aggregates(&self, report: &mut ValidationReport) {
        for group in self.catalog.groups() {
            let Some(all) = group.all_flags_aggregate() else {
                debug!(group = group.name(), "No {ALL_FLAGS_SUFFIX} aggregate");
                continue;
            };

            if all.to_mask() != group.to_mask() {
                report.push(Discrepancy::AllFlagsValue {
                    group: group.name().to_owned(),
                    aggregate: all.name().to_owned(),
                    value: all.to_mask(),
                    expected: group.to_mask(),
                });
            }

            let members = all.members();
            let expected = group.flags();
            if members != expected {
                report.push(Discrepancy::AllFlagsMembers {
                    group: group.name().to_owned(),
                    aggregate: all.name().to_owned(),
                    missing: expected.difference(&members).names().map(str::to_owned).collect(),
                    extra: members.difference(&expected).names().map(str::to_owned).collect(),
                });
            }
        }
    }

    /// `g ∈ f.groups() ⇔ f ∈ g.flags()` (or `g.aggregates()` for aggregates).
    pub fn check_group_symmetry(&self, report: &mut ValidationReport) {
        for flag in self.catalog.flags() {
            for group in flag.groups() {
                let listed = match flag.kind() {
                    FlagKind::Base => group.flags().contains(&flag),
                    FlagKind::Aggregate => group.aggregates().contains(&flag),
                };
                if !listed {
                    report.push(Discrepancy::AsymmetricMembership {
                        flag: flag.name().to_owned(),
                        group: group.name().to_owned(),
                        detail: "flag lists the group but the group does not list the flag"
                            .to_owned(),
                    });
                }
            }
        }

        for group in self.catalog.groups() {
            for flag in group.flags().iter().chain(group.aggregates().iter()) {
                if !flag.belongs_to(&group) {
                    report.push(Discrepancy::AsymmetricMembership {
                        flag: flag.name().to_owned(),
                        group: group.name().to_owned(),
                        detail: "group lists the flag but the flag does not list the group"
                            .to_owned(),
                    });
                }
            }
        }
    }

    /// Records and catalog flags match one to one with equal value, groups, kind and,
    /// for records listing sub-flags, equal flattened members.
    pub fn check_metadata(&self, metadata: &MetadataModel, report: &mut ValidationReport) {
        for record in metadata.records() {
            let Some(flag) = self.catalog.flag(&record.symbol) else {
                report.push(Discrepancy::UnknownRecord { symbol: record.symbol.clone() });
                continue;
            };

            if record.value != flag.to_mask() {
                report.push(Discrepancy::RecordValue {
                    symbol: record.symbol.clone(),
                    metadata: record.value,
                    catalog: flag.to_mask(),
                });
            }

            let record_groups: BTreeSet<&str> = record.groups.iter().map(String::as_str).collect();
            let flag_groups: BTreeSet<&str> = flag.groups().map(|g| g.name()).collect();
            if record_groups != flag_groups {
                report.push(Discrepancy::RecordGroups {
                    symbol: record.symbol.clone(),
                    metadata: sorted(record_groups),
                    catalog: sorted(flag_groups),
                });
            }

            if record.kind != flag.kind() {
                report.push(Discrepancy::RecordKind {
                    symbol: record.symbol.clone(),
                    metadata: record.kind,
                    catalog: flag.kind(),
                });
            } else if record.flags.is_some() {
                let record_members = metadata.flattened_sub_flags(&record.symbol);
                let flag_members: BTreeSet<&str> = flag.members().names().collect();
                if record_members != flag_members {
                    report.push(Discrepancy::RecordMembers {
                        symbol: record.symbol.clone(),
                        metadata: sorted(record_members),
                        catalog: sorted(flag_members),
                    });
                }
            }
        }

        for flag in self.catalog.flags() {
            if metadata.record(flag.name()).is_none() {
                report.push(Discrepancy::MissingRecord { flag: flag.name().to_owned() });
            }
        }
        debug!(records = metadata.len(), "Metadata checked against catalog");
    }
}

fn sorted(names: BTreeSet<&str>) -> Vec<String> {
    names.into_iter().map(str::to_owned).collect()
}
