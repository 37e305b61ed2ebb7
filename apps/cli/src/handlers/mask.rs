use anyhow::{Context, Result};
use szflags::Catalog;
use szflags::domain::format::format_hex;

/// Combines the named flags and prints the mask in decimal, hex and display form.
///
/// # Errors
/// Returns an error naming the first unknown flag.
pub fn print_mask(catalog: &Catalog, names: &[String]) -> Result<()> {
    let set = catalog.parse_flags(names).context("Cannot build a mask")?;
    let mask = set.to_mask();

    println!("decimal: {mask}");
    println!("hex:     {}", format_hex(mask));
    println!("flags:   {set}");

    Ok(())
}
