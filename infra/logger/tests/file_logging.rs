use serial_test::serial;
use std::fs;
use std::time::Duration;
use szflags_domain::config::{LogRotation, LoggingConfig};
use szflags_logger::{Logger, LoggerError};
use tempfile::tempdir;

// One global subscriber per test binary: the first init wins, later ones must fail.
#[test]
#[serial]
fn settings_driven_file_logging_then_second_init_fails() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let settings = LoggingConfig {
        level: "info".to_owned(),
        filter: Some("file_logging=debug".to_owned()),
        json: true,
        directory: Some(log_dir.clone()),
        rotation: LogRotation::Never,
        max_files: 2,
    };

    let logger = Logger::from_settings("szflags-file-test", &settings, false)?;
    assert!(logger.guard().is_some(), "file output should hold a worker guard");

    tracing::debug!(flags = 3, "hello from the file logging test");

    let err = Logger::builder()
        .name("szflags-second")
        .init()
        .expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }));

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    // Never-rotating files carry no date: `<name>.log`.
    assert_eq!(log_file.file_name().and_then(|n| n.to_str()), Some("szflags-file-test.log"));

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|l| l.contains("hello from the file logging test"));
    let line = line.expect("event should be written");
    assert!(line.starts_with('{'), "json output expected, got {line}");

    Ok(())
}

#[test]
#[serial]
fn unknown_level_is_rejected_before_init() {
    let settings = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };
    let err = Logger::from_settings("szflags", &settings, false).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
#[serial]
fn invalid_filter_directives_are_rejected_before_init() {
    let settings =
        LoggingConfig { filter: Some("szflags=loud".to_owned()), ..LoggingConfig::default() };
    let err = Logger::from_settings("szflags", &settings, false).unwrap_err();
    assert!(err.to_string().contains("Invalid filter"), "{err}");
}

#[test]
#[serial]
fn zero_max_files_is_rejected_with_a_directory() {
    let tmp_dir = tempdir().expect("temp dir");
    let settings = LoggingConfig {
        directory: Some(tmp_dir.path().to_path_buf()),
        max_files: 0,
        ..LoggingConfig::default()
    };
    let err = Logger::from_settings("szflags", &settings, false).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
