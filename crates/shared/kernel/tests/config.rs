use serial_test::serial;
use std::io::Write;
use szflags_kernel::config::{ConfigError, load_settings};

fn settings_file(extension: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(extension).tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn loads_toml_file() {
    let file = settings_file(
        ".toml",
        r#"
        [metadata]
        path = "/srv/szflags.json"

        [validation]
        legacy_prefix = "G2_"

        [logging]
        level = "debug"
        json = true
        "#,
    );

    let settings = load_settings(Some(file.path())).unwrap();
    assert_eq!(settings.metadata.path.as_deref(), Some(std::path::Path::new("/srv/szflags.json")));
    assert_eq!(settings.validation.legacy_prefix, "G2_");
    assert_eq!(settings.validation.symbolic_prefix, "SZ_");
    assert_eq!(settings.logging.level, "debug");
    assert!(settings.logging.json);
}

#[test]
#[serial]
fn explicit_missing_file_is_an_error() {
    let err = load_settings(Some("/definitely/not/here/szflags.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
#[serial]
fn missing_default_file_falls_back_to_defaults() {
    let settings = load_settings(None::<&str>).unwrap();
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.validation.legacy_prefix, "SZ_");
}
