use proptest::prelude::*;
use szflags_domain::{FlagSet, algebra, standard};

fn set_from(indices: &[usize]) -> FlagSet<'static> {
    let flags: Vec<_> = standard::catalog().flags().collect();
    indices.iter().map(|&i| flags[i]).collect()
}

fn maybe_set() -> impl Strategy<Value = Option<Vec<usize>>> {
    let count = standard::catalog().flags().len();
    proptest::option::of(proptest::collection::vec(0..count, 0..24))
}

proptest! {
    #[test]
    fn union_mask_is_or_of_masks(a in maybe_set(), b in maybe_set()) {
        let a = a.as_deref().map(set_from);
        let b = b.as_deref().map(set_from);

        let joined = algebra::union(a.as_ref(), b.as_ref());
        prop_assert_eq!(
            algebra::to_mask(Some(&joined)),
            algebra::to_mask(a.as_ref()) | algebra::to_mask(b.as_ref())
        );
    }

    #[test]
    fn union_is_symmetric(a in maybe_set(), b in maybe_set()) {
        let a = a.as_deref().map(set_from);
        let b = b.as_deref().map(set_from);

        prop_assert_eq!(
            algebra::union(a.as_ref(), b.as_ref()),
            algebra::union(b.as_ref(), a.as_ref())
        );
    }

    #[test]
    fn intersects_agrees_with_intersect(a in maybe_set(), b in maybe_set()) {
        let a = a.as_deref().map(set_from);
        let b = b.as_deref().map(set_from);

        prop_assert_eq!(
            algebra::intersects(a.as_ref(), b.as_ref()),
            !algebra::intersect(a.as_ref(), b.as_ref()).is_empty()
        );
    }

    #[test]
    fn display_lists_members_in_declaration_order(a in maybe_set()) {
        let set = a.as_deref().map(set_from).unwrap_or_default();
        let rendered = algebra::to_display_string(Some(&set));

        let ordinals: Vec<_> = set.iter().map(|flag| flag.ordinal()).collect();
        prop_assert!(ordinals.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(rendered.ends_with(&szflags_domain::format::format_mask(set.to_mask())));
        if let Some(first) = set.iter().next() {
            prop_assert!(rendered.starts_with(first.name()));
        }
    }
}

#[test]
fn standard_union_of_defaults() {
    let catalog = standard::catalog();
    let entity = catalog.parse_flags([standard::names::SZ_ENTITY_DEFAULT_FLAGS]).unwrap();
    let info = catalog.parse_flags([standard::names::SZ_WITH_INFO]).unwrap();

    let joined = algebra::union(Some(&entity), Some(&info));
    assert_eq!(algebra::to_mask(Some(&joined)), 0x0038_FBC0 | (1 << 62));
    assert_eq!(
        algebra::to_display_string(Some(&joined)),
        "SZ_WITH_INFO | SZ_ENTITY_DEFAULT_FLAGS [4000 0000 0038 FBC0]"
    );
}
