use anyhow::{Context, Result};
use szflags::Catalog;
use szflags::domain::format::{format_hex, parse_mask};

/// Explains a raw mask.
///
/// With a group the mask is rendered in that group's vocabulary, alternates and raw
/// bits included. Without one every base flag whose bit is set is listed, followed
/// by any bits no flag defines.
///
/// # Errors
/// Returns an error if the mask cannot be parsed or the group is unknown.
pub fn decode_mask(catalog: &Catalog, mask: &str, group: Option<&str>) -> Result<()> {
    let value = parse_mask(mask).with_context(|| format!("Invalid mask '{mask}'"))?;

    if let Some(name) = group {
        let group = catalog.require_group(name).context("Cannot decode the mask")?;
        println!("{}", group.display_mask(value));
        return Ok(());
    }

    let set = catalog.base_flags_in(value);
    for flag in &set {
        let bit = flag.bit().map_or_else(String::new, |bit| bit.to_string());
        println!("{bit:>2}  {}  {}", format_hex(flag.to_mask()), flag.name());
    }

    let unknown = catalog.unknown_bits(value);
    if unknown != 0 {
        println!("unknown bits: {}", format_hex(unknown));
    }
    if set.is_empty() && unknown == 0 {
        println!("{set}");
    }

    Ok(())
}
