use crate::flag::Flag;
use crate::format::format_named;
use std::collections::BTreeMap;
use std::fmt;

/// A set of flags from one catalog, iterated in declaration order.
///
/// Membership is by flag identity (name), so legacy aliases sharing a value are
/// distinct members. Building a set from `Option<Flag>` items skips the `None`
/// entries, which is how call sites that assemble sets generically pass "no flag".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FlagSet<'c> {
    flags: BTreeMap<usize, Flag<'c>>,
}

impl<'c> FlagSet<'c> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flag; returns `false` when it was already present.
    pub fn insert(&mut self, flag: Flag<'c>) -> bool {
        self.flags.insert(flag.ordinal(), flag).is_none()
    }

    pub fn remove(&mut self, flag: &Flag<'_>) -> bool {
        if self.contains(flag) { self.flags.remove(&flag.ordinal()).is_some() } else { false }
    }

    #[must_use]
    pub fn contains(&self, flag: &Flag<'_>) -> bool {
        self.flags.get(&flag.ordinal()).is_some_and(|own| own.name() == flag.name())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Members in declaration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Flag<'c>> + ExactSizeIterator + '_ {
        self.flags.values().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'c str> + '_ {
        self.flags.values().map(Flag::name)
    }

    /// Bitwise-OR of every member's value.
    #[must_use]
    pub fn to_mask(&self) -> u64 {
        self.flags.values().fold(0, |mask, flag| mask | flag.to_mask())
    }

    /// Every flag present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.iter());
        result
    }

    /// Flags present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        small.iter().filter(|flag| large.contains(flag)).collect()
    }

    /// Flags of `self` absent from `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter().filter(|flag| !other.contains(flag)).collect()
    }

    /// Whether the sets share at least one flag, without building the intersection.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        small.iter().any(|flag| large.contains(&flag))
    }

    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|flag| other.contains(&flag))
    }

    /// Expands aggregate members into the base flags they stand for.
    #[must_use]
    pub fn flatten(&self) -> Self {
        self.iter().flat_map(|flag| flag.members().into_iter()).collect()
    }

    /// `NAME1 | NAME2 [XXXX XXXX XXXX XXXX]`, or `{ NONE } [0000 0000 0000 0000]` when empty.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        format_named(self.names(), self.to_mask())
    }
}

impl fmt::Display for FlagSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl fmt::Debug for FlagSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl<'c> FromIterator<Flag<'c>> for FlagSet<'c> {
    fn from_iter<I: IntoIterator<Item = Flag<'c>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'c> FromIterator<Option<Flag<'c>>> for FlagSet<'c> {
    fn from_iter<I: IntoIterator<Item = Option<Flag<'c>>>>(iter: I) -> Self {
        iter.into_iter().flatten().collect()
    }
}

impl<'c> Extend<Flag<'c>> for FlagSet<'c> {
    fn extend<I: IntoIterator<Item = Flag<'c>>>(&mut self, iter: I) {
        for flag in iter {
            self.insert(flag);
        }
    }
}

impl<'c> Extend<Option<Flag<'c>>> for FlagSet<'c> {
    fn extend<I: IntoIterator<Item = Option<Flag<'c>>>>(&mut self, iter: I) {
        self.extend(iter.into_iter().flatten());
    }
}

impl<'c> From<Flag<'c>> for FlagSet<'c> {
    fn from(flag: Flag<'c>) -> Self {
        std::iter::once(flag).collect()
    }
}

impl<'c> IntoIterator for FlagSet<'c> {
    type Item = Flag<'c>;
    type IntoIter = std::collections::btree_map::IntoValues<usize, Flag<'c>>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.into_values()
    }
}

impl<'a, 'c> IntoIterator for &'a FlagSet<'c> {
    type Item = Flag<'c>;
    type IntoIter = std::iter::Copied<std::collections::btree_map::Values<'a, usize, Flag<'c>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.values().copied()
    }
}
