//! The closed, immutable collection of flags and usage groups.
//!
//! A [`Catalog`] is assembled once through [`CatalogBuilder`], which checks every
//! structural invariant before handing out the first [`Flag`] handle. After that it is
//! plain read-only data and can be shared across threads freely.

use crate::error::{DefinitionError, LookupError};
use crate::flag::{Flag, FlagEntry, FlagKind};
use crate::group::{GroupEntry, UsageGroup};
use crate::set::FlagSet;
use fxhash::FxHashMap;
use std::borrow::Cow;
use std::fmt;

pub struct Catalog {
    flags: Vec<FlagEntry>,
    groups: Vec<GroupEntry>,
    flag_index: FxHashMap<String, usize>,
    group_index: FxHashMap<String, usize>,
}

impl Catalog {
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub(crate) fn entries(&self) -> &[FlagEntry] {
        &self.flags
    }

    pub(crate) fn group_entries(&self) -> &[GroupEntry] {
        &self.groups
    }

    /// All flags in declaration order. Each call starts a fresh iteration.
    pub fn flags(&self) -> impl ExactSizeIterator<Item = Flag<'_>> + Clone + '_ {
        (0..self.flags.len()).map(move |ordinal| Flag::new(self, ordinal))
    }

    /// All usage groups in declaration order.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = UsageGroup<'_>> + Clone + '_ {
        (0..self.groups.len()).map(move |ordinal| UsageGroup::new(self, ordinal))
    }

    pub fn base_flags(&self) -> impl Iterator<Item = Flag<'_>> + Clone + '_ {
        self.flags().filter(|flag| flag.kind() == FlagKind::Base)
    }

    pub fn aggregate_flags(&self) -> impl Iterator<Item = Flag<'_>> + Clone + '_ {
        self.flags().filter(Flag::is_aggregate)
    }

    #[must_use]
    pub fn flag(&self, name: &str) -> Option<Flag<'_>> {
        self.flag_index.get(name).map(|&ordinal| Flag::new(self, ordinal))
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<UsageGroup<'_>> {
        self.group_index.get(name).map(|&ordinal| UsageGroup::new(self, ordinal))
    }

    /// Resolves a flag name, reporting a miss as an error.
    ///
    /// # Errors
    /// [`LookupError::UnknownFlag`] when no flag carries `name`.
    pub fn require_flag(&self, name: &str) -> Result<Flag<'_>, LookupError> {
        self.flag(name)
            .ok_or_else(|| LookupError::UnknownFlag { name: name.to_owned(), context: None })
    }

    /// Resolves a usage group name, reporting a miss as an error.
    ///
    /// # Errors
    /// [`LookupError::UnknownGroup`] when no group carries `name`.
    pub fn require_group(&self, name: &str) -> Result<UsageGroup<'_>, LookupError> {
        self.group(name)
            .ok_or_else(|| LookupError::UnknownGroup { name: name.to_owned(), context: None })
    }

    /// Resolves a list of symbols into a set.
    ///
    /// # Errors
    /// [`LookupError::UnknownFlag`] for the first name that does not resolve.
    pub fn parse_flags<I, S>(&self, names: I) -> Result<FlagSet<'_>, LookupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().map(|name| self.require_flag(name.as_ref())).collect()
    }

    /// A base flag outside `group` whose value is exactly `value`.
    ///
    /// Used when a mask is rendered for a group that has no flag of its own for a
    /// bit, e.g. the search aliases of the export inclusion bits. The first match in
    /// declaration order wins.
    #[must_use]
    pub fn alternate_for_value(&self, value: u64, group: &UsageGroup<'_>) -> Option<Flag<'_>> {
        self.base_flags().find(|flag| flag.to_mask() == value && !flag.belongs_to(group))
    }

    /// Base flags whose bit is set in `mask`, aliases included.
    #[must_use]
    pub fn base_flags_in(&self, mask: u64) -> FlagSet<'_> {
        self.base_flags().filter(|flag| flag.to_mask() & mask != 0).collect()
    }

    /// Bits of `mask` that no base flag of this catalog covers.
    #[must_use]
    pub fn unknown_bits(&self, mask: u64) -> u64 {
        let known = self.base_flags().fold(0, |acc, flag| acc | flag.to_mask());
        mask & !known
    }

    /// Checks `g ∈ f.groups() ⇔ f ∈ g.flags()` for base flags and the same relation
    /// against `g.aggregates()` for aggregates.
    ///
    /// # Errors
    /// [`DefinitionError::AsymmetricMembership`] naming the first pair that disagrees.
    pub fn verify_membership(&self) -> Result<(), DefinitionError> {
        for (ordinal, entry) in self.flags.iter().enumerate() {
            for &group in &entry.groups {
                let listed = match entry.kind {
                    FlagKind::Base => &self.groups[group].flags,
                    FlagKind::Aggregate => &self.groups[group].aggregates,
                };
                if !listed.contains(&ordinal) {
                    return Err(asymmetric(
                        &entry.name,
                        &self.groups[group].name,
                        "flag lists the group but the group does not list the flag",
                    ));
                }
            }
        }

        for (group_ordinal, group) in self.groups.iter().enumerate() {
            let listed = group
                .flags
                .iter()
                .map(|&o| (o, FlagKind::Base))
                .chain(group.aggregates.iter().map(|&o| (o, FlagKind::Aggregate)));
            for (ordinal, expected) in listed {
                let entry = &self.flags[ordinal];
                if entry.kind != expected {
                    return Err(asymmetric(
                        &entry.name,
                        &group.name,
                        "flag is listed under the wrong kind",
                    ));
                }
                if !entry.groups.contains(&group_ordinal) {
                    return Err(asymmetric(
                        &entry.name,
                        &group.name,
                        "group lists the flag but the flag does not list the group",
                    ));
                }
            }
        }

        Ok(())
    }
}

fn asymmetric(flag: &str, group: &str, detail: &'static str) -> DefinitionError {
    DefinitionError::AsymmetricMembership {
        flag: flag.to_owned(),
        group: group.to_owned(),
        detail: Cow::Borrowed(detail),
        context: None,
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("flags", &self.flags.len())
            .field("groups", &self.groups.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
enum PendingKind {
    Base(u32),
    Aggregate(Vec<String>),
}

#[derive(Debug, Clone)]
struct PendingFlag {
    name: String,
    kind: PendingKind,
    groups: Vec<String>,
}

/// Collects group and flag declarations, then validates them in [`build`](Self::build).
///
/// Aggregate members may name base flags or earlier aggregates; forward references
/// are rejected so that declaration order alone fixes every value.
///
/// ```rust
/// use szflags_domain::Catalog;
///
/// let catalog = Catalog::builder()
///     .group("G1")
///     .group("G2")
///     .base("A", 0, &["G1"])
///     .base("B", 1, &["G1", "G2"])
///     .aggregate("ALL_G1", &["A", "B"], &["G1"])
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.flag("ALL_G1").unwrap().to_mask(), 3);
/// ```
#[derive(Debug, Default, Clone)]
pub struct CatalogBuilder {
    groups: Vec<String>,
    flags: Vec<PendingFlag>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn group(mut self, name: impl Into<String>) -> Self {
        self.groups.push(name.into());
        self
    }

    #[must_use]
    pub fn base(mut self, name: impl Into<String>, bit: u32, groups: &[&str]) -> Self {
        self.flags.push(PendingFlag {
            name: name.into(),
            kind: PendingKind::Base(bit),
            groups: owned(groups),
        });
        self
    }

    #[must_use]
    pub fn aggregate(mut self, name: impl Into<String>, members: &[&str], groups: &[&str]) -> Self {
        self.flags.push(PendingFlag {
            name: name.into(),
            kind: PendingKind::Aggregate(owned(members)),
            groups: owned(groups),
        });
        self
    }

    /// Validates every declaration and freezes the catalog.
    ///
    /// # Errors
    /// The first [`DefinitionError`] found, checking duplicate names, then each flag
    /// in declaration order, then per-group value collisions and finally membership
    /// symmetry.
    pub fn build(self) -> Result<Catalog, DefinitionError> {
        let mut group_index = FxHashMap::default();
        for (ordinal, name) in self.groups.iter().enumerate() {
            if group_index.insert(name.clone(), ordinal).is_some() {
                return Err(DefinitionError::DuplicateGroup { name: name.clone(), context: None });
            }
        }

        let mut flag_index = FxHashMap::default();
        for (ordinal, pending) in self.flags.iter().enumerate() {
            if flag_index.insert(pending.name.clone(), ordinal).is_some() {
                return Err(DefinitionError::DuplicateFlag {
                    name: pending.name.clone(),
                    context: None,
                });
            }
        }

        let mut entries: Vec<FlagEntry> = Vec::with_capacity(self.flags.len());
        for (ordinal, pending) in self.flags.into_iter().enumerate() {
            let entry =
                resolve(pending, ordinal, &self.groups, &group_index, &flag_index, &entries)?;
            entries.push(entry);
        }

        let mut groups: Vec<GroupEntry> = self
            .groups
            .into_iter()
            .map(|name| GroupEntry { name, flags: Vec::new(), aggregates: Vec::new() })
            .collect();
        for (ordinal, entry) in entries.iter().enumerate() {
            for &group in &entry.groups {
                match entry.kind {
                    FlagKind::Base => groups[group].flags.push(ordinal),
                    FlagKind::Aggregate => groups[group].aggregates.push(ordinal),
                }
            }
        }

        for group in &groups {
            check_unique_values(group, &entries)?;
        }

        let catalog = Catalog { flags: entries, groups, flag_index, group_index };
        catalog.verify_membership()?;
        Ok(catalog)
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|&name| name.to_owned()).collect()
}

fn resolve(
    pending: PendingFlag,
    ordinal: usize,
    group_names: &[String],
    group_index: &FxHashMap<String, usize>,
    flag_index: &FxHashMap<String, usize>,
    declared: &[FlagEntry],
) -> Result<FlagEntry, DefinitionError> {
    let mut groups = Vec::with_capacity(pending.groups.len());
    for group in &pending.groups {
        let Some(&group_ordinal) = group_index.get(group) else {
            return Err(DefinitionError::UnknownGroup {
                flag: pending.name,
                group: group.clone(),
                context: None,
            });
        };
        groups.push(group_ordinal);
    }
    groups.sort_unstable();
    groups.dedup();

    match pending.kind {
        PendingKind::Base(bit) => {
            if bit >= u64::BITS {
                return Err(DefinitionError::BitOutOfRange { flag: pending.name, bit, context: None });
            }
            if groups.is_empty() {
                return Err(DefinitionError::Ungrouped { flag: pending.name, context: None });
            }
            Ok(FlagEntry {
                name: pending.name,
                value: 1_u64 << bit,
                kind: FlagKind::Base,
                bit: Some(bit),
                members: Vec::new(),
                groups,
            })
        },
        PendingKind::Aggregate(member_names) => {
            let mut members = Vec::new();
            for member in &member_names {
                let Some(&member_ordinal) = flag_index.get(member).filter(|&&o| o < ordinal)
                else {
                    return Err(DefinitionError::UnknownMember {
                        flag: pending.name,
                        member: member.clone(),
                        context: None,
                    });
                };
                let referenced = &declared[member_ordinal];
                match referenced.kind {
                    FlagKind::Base => members.push(member_ordinal),
                    FlagKind::Aggregate => members.extend_from_slice(&referenced.members),
                }
            }
            members.sort_unstable();
            members.dedup();

            for &group in &groups {
                if let Some(outside) = members.iter().find(|&&m| !declared[m].groups.contains(&group))
                {
                    return Err(DefinitionError::MemberOutsideGroup {
                        flag: pending.name,
                        member: declared[*outside].name.clone(),
                        group: group_names[group].clone(),
                        context: None,
                    });
                }
            }

            let value = members.iter().fold(0, |mask, &m| mask | declared[m].value);
            Ok(FlagEntry {
                name: pending.name,
                value,
                kind: FlagKind::Aggregate,
                bit: None,
                members,
                groups,
            })
        },
    }
}

fn check_unique_values(group: &GroupEntry, entries: &[FlagEntry]) -> Result<(), DefinitionError> {
    let mut seen: FxHashMap<u64, usize> = FxHashMap::default();
    for &ordinal in &group.flags {
        let entry = &entries[ordinal];
        if let Some(&first) = seen.get(&entry.value) {
            return Err(DefinitionError::DuplicateValue {
                group: group.name.clone(),
                first: entries[first].name.clone(),
                second: entry.name.clone(),
                value: entry.value,
                context: None,
            });
        }
        seen.insert(entry.value, ordinal);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CatalogBuilder {
        Catalog::builder()
            .group("G1")
            .group("G2")
            .base("A", 0, &["G1"])
            .base("B", 1, &["G1", "G2"])
            .aggregate("ALL_G1", &["A", "B"], &["G1"])
    }

    #[test]
    fn builds_and_indexes_sample() {
        let catalog = sample().build().unwrap();

        assert_eq!(catalog.flags().len(), 3);
        assert_eq!(catalog.groups().len(), 2);
        assert_eq!(catalog.flag("ALL_G1").unwrap().to_mask(), 3);
        assert!(catalog.flag("C").is_none());

        let g1 = catalog.group("G1").unwrap();
        let names: Vec<_> = g1.flags().names().collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(g1.aggregates().names().collect::<Vec<_>>(), ["ALL_G1"]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = sample().base("A", 2, &["G1"]).build().unwrap_err();
        assert!(matches!(err, DefinitionError::DuplicateFlag { ref name, .. } if name == "A"));

        let err = sample().group("G1").build().unwrap_err();
        assert!(matches!(err, DefinitionError::DuplicateGroup { ref name, .. } if name == "G1"));
    }

    #[test]
    fn rejects_unknown_group_and_member() {
        let err = sample().base("C", 2, &["G9"]).build().unwrap_err();
        assert!(matches!(err, DefinitionError::UnknownGroup { ref group, .. } if group == "G9"));

        let err = sample().aggregate("X", &["NOPE"], &[]).build().unwrap_err();
        assert!(matches!(err, DefinitionError::UnknownMember { ref member, .. } if member == "NOPE"));
    }

    #[test]
    fn rejects_forward_member() {
        let err = Catalog::builder()
            .group("G1")
            .aggregate("EARLY", &["LATE"], &[])
            .base("LATE", 0, &["G1"])
            .build()
            .unwrap_err();
        assert!(matches!(err, DefinitionError::UnknownMember { ref flag, .. } if flag == "EARLY"));
    }

    #[test]
    fn rejects_out_of_range_and_ungrouped_bits() {
        let err = sample().base("C", 64, &["G1"]).build().unwrap_err();
        assert!(matches!(err, DefinitionError::BitOutOfRange { bit: 64, .. }));

        let err = sample().base("C", 2, &[]).build().unwrap_err();
        assert!(matches!(err, DefinitionError::Ungrouped { ref flag, .. } if flag == "C"));
    }

    #[test]
    fn rejects_colliding_values_in_one_group() {
        let err = sample().base("A2", 0, &["G1"]).build().unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::DuplicateValue { ref first, ref second, value: 1, .. }
                if first == "A" && second == "A2"
        ));

        // Same value in a different group is a legal alias.
        assert!(sample().base("A2", 0, &["G2"]).build().is_ok());
    }

    #[test]
    fn rejects_member_outside_aggregate_group() {
        let err = sample().aggregate("ALL_G2", &["A", "B"], &["G2"]).build().unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::MemberOutsideGroup { ref member, ref group, .. }
                if member == "A" && group == "G2"
        ));
    }

    #[test]
    fn nested_aggregates_flatten_to_base_members() {
        let catalog = sample().aggregate("OUTER", &["ALL_G1"], &["G1"]).build().unwrap();
        let outer = catalog.flag("OUTER").unwrap();

        assert_eq!(outer.to_mask(), 3);
        assert_eq!(outer.members().names().collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn zero_valued_global_aggregate_is_legal() {
        let catalog = sample().aggregate("NONE", &[], &[]).build().unwrap();
        let none = catalog.flag("NONE").unwrap();

        assert_eq!(none.to_mask(), 0);
        assert_eq!(none.groups().len(), 0);
    }

    #[test]
    fn alternate_comes_from_another_group() {
        let catalog = sample().base("A_ALIAS", 0, &["G2"]).build().unwrap();
        let g1 = catalog.group("G1").unwrap();
        let g2 = catalog.group("G2").unwrap();

        assert_eq!(catalog.alternate_for_value(1, &g1).unwrap().name(), "A_ALIAS");
        assert_eq!(catalog.alternate_for_value(1, &g2).unwrap().name(), "A");
        assert!(catalog.alternate_for_value(4, &g1).is_none());
    }

    #[test]
    fn parse_flags_reports_first_unknown() {
        let catalog = sample().build().unwrap();
        let err = catalog.parse_flags(["A", "Z", "Y"]).unwrap_err();
        assert_eq!(err, LookupError::UnknownFlag { name: "Z".into(), context: None });
        assert_eq!(catalog.parse_flags(["B", "A"]).unwrap().to_mask(), 3);
    }

    #[test]
    fn decodes_mask_into_base_flags() {
        let catalog = sample().build().unwrap();
        assert_eq!(catalog.base_flags_in(0b111).names().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(catalog.unknown_bits(0b111), 0b100);
    }
}
