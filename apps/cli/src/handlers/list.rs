use anyhow::{Context, Result};
use szflags::domain::format::format_hex;
use szflags::{Catalog, Flag};

/// Prints flags in declaration order: name, value, kind and groups.
///
/// # Errors
/// Returns an error if `group` names no usage group.
pub fn list_flags(catalog: &Catalog, group: Option<&str>, aggregates: bool) -> Result<()> {
    let group =
        group.map(|name| catalog.require_group(name)).transpose().context("Cannot list flags")?;

    let selected = catalog
        .flags()
        .filter(|flag| aggregates || !flag.is_aggregate())
        .filter(|flag| group.as_ref().is_none_or(|g| flag.belongs_to(g)));

    for flag in selected {
        print_row(flag);
    }

    Ok(())
}

fn print_row(flag: Flag<'_>) {
    let groups = flag.groups().map(|g| g.name()).collect::<Vec<_>>().join(", ");
    let kind = flag.kind().to_string();
    println!("{:<48} {} {kind:<9} {groups}", flag.name(), format_hex(flag.to_mask()));
}
