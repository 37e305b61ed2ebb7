use crate::catalog::Catalog;
use crate::flag::Flag;
use crate::format::{NONE_LABEL, format_mask, format_unresolved_bit};
use crate::set::FlagSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Suffix shared by usage group names, stripped to form aggregate names.
pub const GROUP_SUFFIX: &str = "_FLAGS";

/// Suffix of the aggregate that unions every base flag of one group.
pub const ALL_FLAGS_SUFFIX: &str = "_ALL_FLAGS";

#[derive(Debug)]
pub(crate) struct GroupEntry {
    pub(crate) name: String,
    /// Base flag ordinals, ascending.
    pub(crate) flags: Vec<usize>,
    /// Aggregate flag ordinals, ascending.
    pub(crate) aggregates: Vec<usize>,
}

/// A handle to a named context in which a subset of flags is meaningful.
#[derive(Clone, Copy)]
pub struct UsageGroup<'c> {
    catalog: &'c Catalog,
    ordinal: usize,
}

impl<'c> UsageGroup<'c> {
    pub(crate) const fn new(catalog: &'c Catalog, ordinal: usize) -> Self {
        Self { catalog, ordinal }
    }

    fn entry(&self) -> &'c GroupEntry {
        &self.catalog.group_entries()[self.ordinal]
    }

    #[must_use]
    pub fn name(&self) -> &'c str {
        &self.entry().name
    }

    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The base flags valid in this group.
    #[must_use]
    pub fn flags(&self) -> FlagSet<'c> {
        self.entry().flags.iter().map(|&o| Flag::new(self.catalog, o)).collect()
    }

    /// The aggregate flags scoped to this group.
    #[must_use]
    pub fn aggregates(&self) -> FlagSet<'c> {
        self.entry().aggregates.iter().map(|&o| Flag::new(self.catalog, o)).collect()
    }

    /// Base flags and aggregates together, in declaration order.
    #[must_use]
    pub fn all_members(&self) -> FlagSet<'c> {
        let entry = self.entry();
        entry.flags.iter().chain(&entry.aggregates).map(|&o| Flag::new(self.catalog, o)).collect()
    }

    #[must_use]
    pub fn contains(&self, flag: &Flag<'_>) -> bool {
        flag.belongs_to(self)
    }

    /// Bitwise-OR of every base flag in the group.
    #[must_use]
    pub fn to_mask(&self) -> u64 {
        self.entry().flags.iter().fold(0, |mask, &o| mask | self.catalog.entries()[o].value)
    }

    /// The group name without its `_FLAGS` suffix, e.g. `SZ_ENTITY`.
    #[must_use]
    pub fn stem(&self) -> &'c str {
        let name = self.name();
        name.strip_suffix(GROUP_SUFFIX).unwrap_or(name)
    }

    /// The `<STEM>_ALL_FLAGS` aggregate scoped to this group, when declared.
    #[must_use]
    pub fn all_flags_aggregate(&self) -> Option<Flag<'c>> {
        let wanted = format!("{}{ALL_FLAGS_SUFFIX}", self.stem());
        self.entry()
            .aggregates
            .iter()
            .map(|&o| Flag::new(self.catalog, o))
            .find(|flag| flag.name() == wanted)
    }

    /// Finds this group's own base flag carrying exactly `value`.
    #[must_use]
    pub fn flag_for_value(&self, value: u64) -> Option<Flag<'c>> {
        self.entry()
            .flags
            .iter()
            .find(|&&o| self.catalog.entries()[o].value == value)
            .map(|&o| Flag::new(self.catalog, o))
    }

    /// Renders a raw mask in the vocabulary of this group.
    ///
    /// Every set bit resolves, in ascending bit order, to this group's flag with that
    /// value, else to an alternate flag of another group sharing the value, else to
    /// the raw hex value of the bit. Zero renders as `{ NONE }`.
    #[must_use]
    pub fn display_mask(&self, mask: u64) -> String {
        if mask == 0 {
            return format!("{NONE_LABEL} {}", format_mask(0));
        }

        let mut parts: Vec<String> = Vec::new();
        for bit in 0..u64::BITS {
            let value = 1_u64 << bit;
            if mask & value == 0 {
                continue;
            }
            let resolved = self
                .flag_for_value(value)
                .or_else(|| self.catalog.alternate_for_value(value, self));
            match resolved {
                Some(flag) => parts.push(flag.name().to_owned()),
                None => parts.push(format_unresolved_bit(value)),
            }
        }

        format!("{} {}", parts.join(" | "), format_mask(mask))
    }

    #[must_use]
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}

impl PartialEq for UsageGroup<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for UsageGroup<'_> {}

impl Hash for UsageGroup<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Debug for UsageGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsageGroup")
            .field("name", &self.name())
            .field("flags", &self.entry().flags.len())
            .field("aggregates", &self.entry().aggregates.len())
            .finish()
    }
}

impl fmt::Display for UsageGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
