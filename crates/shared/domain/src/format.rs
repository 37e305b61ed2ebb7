//! Diagnostic string formats shared by flag sets, groups and reports.
//!
//! The layouts here are consumed by log scrapers and tooling, so they are fixed:
//! uppercase hex, sixteen digits split into four space-separated groups.

use std::num::ParseIntError;

/// Label printed in place of flag names for an empty set or a zero mask.
pub const NONE_LABEL: &str = "{ NONE }";

/// Separator between flag names.
pub const NAME_SEPARATOR: &str = " | ";

/// Renders a mask as `[XXXX XXXX XXXX XXXX]`.
///
/// ```rust
/// use szflags_domain::format::format_mask;
///
/// assert_eq!(format_mask(3), "[0000 0000 0000 0003]");
/// assert_eq!(format_mask(1 << 62), "[4000 0000 0000 0000]");
/// ```
#[must_use]
pub fn format_mask(mask: u64) -> String {
    let digits = format!("{mask:016X}");
    format!("[{} {} {} {}]", &digits[0..4], &digits[4..8], &digits[8..12], &digits[12..16])
}

/// Renders a bit no catalog flag could name.
#[must_use]
pub fn format_unresolved_bit(value: u64) -> String {
    format_hex(value)
}

/// Renders a value as `0x` followed by sixteen uppercase hex digits.
#[must_use]
pub fn format_hex(value: u64) -> String {
    format!("0x{value:016X}")
}

/// Joins names and appends the bracketed mask, or the `{ NONE }` form when empty.
pub(crate) fn format_named<'a>(names: impl IntoIterator<Item = &'a str>, mask: u64) -> String {
    let names: Vec<&str> = names.into_iter().collect();
    if names.is_empty() {
        return format!("{NONE_LABEL} {}", format_mask(mask));
    }
    format!("{} {}", names.join(NAME_SEPARATOR), format_mask(mask))
}

/// Parses a mask written in decimal, `0x` hex or `0b` binary; `_` separators are allowed.
///
/// # Errors
/// Returns [`ParseIntError`] when the digits are invalid for the detected base or overflow 64 bits.
///
/// ```rust
/// use szflags_domain::format::parse_mask;
///
/// assert_eq!(parse_mask("0x4000_0000_0000_0000").unwrap(), 1 << 62);
/// assert_eq!(parse_mask("0b101").unwrap(), 5);
/// assert_eq!(parse_mask("42").unwrap(), 42);
/// ```
pub fn parse_mask(text: &str) -> Result<u64, ParseIntError> {
    let cleaned: String = text.trim().chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();

    if let Some(hex) = lower.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else {
        lower.parse::<u64>()
    }
}
