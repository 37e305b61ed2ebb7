use szflags::domain::config::Settings;
use szflags::{algebra, features, registry, standard};

#[test]
fn registry_is_initialized_once() {
    let settings = Settings::default();
    let first = registry(&settings).unwrap();
    let second = registry(&settings).unwrap();

    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first.catalog(), standard::catalog()));
    assert_eq!(first.metadata().len(), first.catalog().flags().len());
}

#[test]
fn registry_catalog_builds_masks() {
    let registry = registry(&Settings::default()).unwrap();
    let set = registry
        .catalog()
        .parse_flags([standard::names::SZ_WITH_INFO, standard::names::SZ_NO_FLAGS])
        .unwrap();

    assert_eq!(algebra::to_mask(Some(&set)), 1 << 62);
    assert_eq!(algebra::to_display_string(Some(&set)), "SZ_WITH_INFO | SZ_NO_FLAGS [4000 0000 0000 0000]");
}

#[test]
fn enabled_features_are_listed() {
    assert!(features::is_enabled("catalog"));
    assert!(features::is_enabled("validation"));
    assert!(!features::is_enabled("server"));
}
