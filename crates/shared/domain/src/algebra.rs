//! Set algebra over possibly-absent flag sets.
//!
//! Callers assembling flags generically often hold "no set at all" rather than an
//! empty one. Every function here treats `None` exactly like the empty set, so the
//! result never depends on which of the two a caller passed.

use crate::format::format_named;
use crate::set::FlagSet;

/// Every flag in either set; duplicates collapse by identity.
#[must_use]
pub fn union<'c>(a: Option<&FlagSet<'c>>, b: Option<&FlagSet<'c>>) -> FlagSet<'c> {
    match (a, b) {
        (Some(a), Some(b)) => a.union(b),
        (Some(only), None) | (None, Some(only)) => only.clone(),
        (None, None) => FlagSet::new(),
    }
}

/// Flags present in both sets; empty when either side is absent.
#[must_use]
pub fn intersect<'c>(a: Option<&FlagSet<'c>>, b: Option<&FlagSet<'c>>) -> FlagSet<'c> {
    match (a, b) {
        (Some(a), Some(b)) => a.intersection(b),
        _ => FlagSet::new(),
    }
}

/// Whether the sets share a flag. Never materializes the intersection.
#[must_use]
pub fn intersects(a: Option<&FlagSet<'_>>, b: Option<&FlagSet<'_>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.intersects(b),
        _ => false,
    }
}

#[must_use]
pub fn to_mask(set: Option<&FlagSet<'_>>) -> u64 {
    set.map_or(0, FlagSet::to_mask)
}

/// `NAME1 | NAME2 [XXXX XXXX XXXX XXXX]`; `{ NONE } [0000 0000 0000 0000]` when
/// the set is absent or empty.
#[must_use]
pub fn to_display_string(set: Option<&FlagSet<'_>>) -> String {
    match set {
        Some(set) => set.to_display_string(),
        None => format_named(std::iter::empty(), 0),
    }
}
