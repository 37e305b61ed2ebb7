use serde_json::json;
use szflags_domain::config::{LogRotation, LoggingConfig, Settings, ValidationConfig};

#[test]
fn settings_defaults_are_sane() {
    let validation = ValidationConfig::default();
    assert_eq!(validation.legacy_prefix, "SZ_");
    assert_eq!(validation.symbolic_prefix, "SZ_");

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(!logging.json);
    assert!(logging.directory.is_none());
    assert!(logging.filter.is_none());
    assert_eq!(logging.rotation, LogRotation::Daily);
    assert_eq!(logging.max_files, 10);

    let settings = Settings::default();
    assert!(settings.metadata.path.is_none());
}

#[test]
fn settings_deserialize_with_partial_sections() {
    let raw = json!({
        "metadata": { "path": "/etc/szflags/flags.json" },
        "validation": { "legacy_prefix": "G2_" },
        "logging": { "json": true, "rotation": "hourly", "max_files": 3 }
    });

    let settings: Settings = serde_json::from_value(raw).expect("settings deserialize");
    assert_eq!(
        settings.metadata.path.as_deref(),
        Some(std::path::Path::new("/etc/szflags/flags.json"))
    );
    assert_eq!(settings.validation.legacy_prefix, "G2_");
    assert_eq!(settings.validation.symbolic_prefix, "SZ_");
    assert!(settings.logging.json);
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.rotation, LogRotation::Hourly);
    assert_eq!(settings.logging.max_files, 3);
}

#[test]
fn settings_clone_on_write() {
    let original = Settings::default();
    let mut changed = original.clone();
    changed.logging.level = "debug".to_owned();

    assert_eq!(original.logging.level, "info");
    assert_eq!(changed.logging.level, "debug");
}
