use crate::catalog::Catalog;
use crate::group::UsageGroup;
use crate::set::FlagSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Whether a flag is one physical bit or a fixed union of other flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    Base,
    Aggregate,
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Aggregate => f.write_str("aggregate"),
        }
    }
}

/// Storage for one declared flag. Indices refer to the owning catalog.
#[derive(Debug)]
pub(crate) struct FlagEntry {
    pub(crate) name: String,
    pub(crate) value: u64,
    pub(crate) kind: FlagKind,
    pub(crate) bit: Option<u32>,
    /// Flattened base members in declaration order (aggregates only).
    pub(crate) members: Vec<usize>,
    /// Usage group ordinals, ascending.
    pub(crate) groups: Vec<usize>,
}

/// A handle to a flag declared in a [`Catalog`].
///
/// Handles are `Copy` and borrow the catalog. Two handles are equal when they name
/// the same flag; flags sharing a numeric value (legacy aliases) stay distinct.
#[derive(Clone, Copy)]
pub struct Flag<'c> {
    catalog: &'c Catalog,
    ordinal: usize,
}

impl<'c> Flag<'c> {
    pub(crate) const fn new(catalog: &'c Catalog, ordinal: usize) -> Self {
        Self { catalog, ordinal }
    }

    fn entry(&self) -> &'c FlagEntry {
        &self.catalog.entries()[self.ordinal]
    }

    /// The declared symbol, case-sensitive.
    #[must_use]
    pub fn name(&self) -> &'c str {
        &self.entry().name
    }

    /// Position in declaration order; drives every display ordering.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The precomputed mask value.
    #[must_use]
    pub fn to_mask(&self) -> u64 {
        self.entry().value
    }

    #[must_use]
    pub fn kind(&self) -> FlagKind {
        self.entry().kind
    }

    #[must_use]
    pub fn is_aggregate(&self) -> bool {
        self.kind() == FlagKind::Aggregate
    }

    /// The bit index of a base flag, `None` for aggregates.
    #[must_use]
    pub fn bit(&self) -> Option<u32> {
        self.entry().bit
    }

    /// Usage groups this flag is valid in, in group declaration order.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = UsageGroup<'c>> + Clone + use<'c> {
        let catalog = self.catalog;
        self.entry().groups.iter().map(move |&ordinal| UsageGroup::new(catalog, ordinal))
    }

    #[must_use]
    pub fn belongs_to(&self, group: &UsageGroup<'_>) -> bool {
        self.groups().any(|own| own.name() == group.name())
    }

    /// The base flags this flag stands for: its members when aggregate, itself otherwise.
    #[must_use]
    pub fn members(&self) -> FlagSet<'c> {
        match self.kind() {
            FlagKind::Base => std::iter::once(*self).collect(),
            FlagKind::Aggregate => {
                self.entry().members.iter().map(|&o| Self::new(self.catalog, o)).collect()
            },
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}

impl PartialEq for Flag<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Flag<'_> {}

impl Hash for Flag<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name())
            .field("value", &format_args!("{:#018X}", self.to_mask()))
            .field("kind", &self.kind())
            .finish()
    }
}

impl fmt::Display for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
