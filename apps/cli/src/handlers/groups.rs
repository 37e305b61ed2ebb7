use szflags::Catalog;
use szflags::domain::format::format_hex;

/// Prints every usage group with its base-flag count and the OR of those flags.
pub fn list_groups(catalog: &Catalog) {
    for group in catalog.groups() {
        println!(
            "{:<32} {:>3} flags  {}",
            group.name(),
            group.flags().len(),
            format_hex(group.to_mask())
        );
    }
}
