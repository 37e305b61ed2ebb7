//! # Logger
//!
//! Installs the global `tracing` subscriber for the flag registry tools.
//!
//! Console output is compact and goes to standard error, leaving standard output to
//! the commands themselves. When a directory is configured, events are also written
//! to rolling files through a non-blocking worker, optionally as JSON lines. The
//! default level is overridden per target by `filter` directives, or by `RUST_LOG`
//! when no directives are configured.
//!
//! Most callers go through [`Logger::from_settings`] with the `[logging]` section:
//!
//! ```toml
//! [logging]
//! level = "info"
//! filter = "szflags_validation=debug"
//! directory = "/var/log/szflags"
//! rotation = "daily"   # minutely | hourly | daily | never
//! max_files = 10
//! json = true
//! ```
//!
//! ```rust
//! # use szflags_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("szflags")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use szflags_domain::config::{LogRotation, LoggingConfig};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Builder state before a name is given.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state once the log name (and file prefix) is known.
#[derive(Debug)]
pub struct Named(String);

/// Configures and installs the global subscriber. [`LoggerBuilder::init`] is only
/// available once [`LoggerBuilder::name`] has been called.
#[derive(Debug)]
pub struct LoggerBuilder<N = Unnamed> {
    name: N,
    level: LevelFilter,
    filter: Option<String>,
    console: bool,
    directory: Option<PathBuf>,
    rotation: LogRotation,
    max_files: usize,
    json: bool,
}

impl LoggerBuilder<Unnamed> {
    /// Names the log; rolling files are called `<name>.<date>.log`.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder {
            name: Named(name.into()),
            level: self.level,
            filter: self.filter,
            console: self.console,
            directory: self.directory,
            rotation: self.rotation,
            max_files: self.max_files,
            json: self.json,
        }
    }
}

impl LoggerBuilder<Named> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Per-target directives (e.g. `szflags_metadata=debug`). Replaces `RUST_LOG`.
    #[must_use]
    pub fn filter(mut self, directives: impl Into<String>) -> Self {
        self.filter = Some(directives.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Also writes rolling log files into `directory`, creating it on init.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Rotation of the log files; no effect without a directory.
    #[must_use]
    pub const fn rotation(mut self, rotation: LogRotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rotated files kept on disk; no effect without a directory.
    #[must_use]
    pub const fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Writes log files as JSON lines; no effect without a directory.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's [`WorkerGuard`]; keep it alive
    /// until shutdown so buffered lines reach the file.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   invalid filter directives or no enabled output.
    /// * [`LoggerError::Appender`] if the log file cannot be opened.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.check()?;
        let filter = env_filter(self.level, self.filter.as_deref())?;

        let mut layers = Vec::new();
        if self.console {
            layers.push(console_layer());
        }
        let guard = match &self.directory {
            Some(directory) => {
                let (file, guard) = self.file_layer(directory)?;
                layers.push(file);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled; turn on the console or set a directory".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        Ok(Logger { guard })
    }

    fn check(&self) -> Result<(), LoggerError> {
        let invalid = |message: &'static str| LoggerError::InvalidConfiguration {
            message: message.into(),
            context: Some(format!("logger '{}'", self.name.0).into()),
        };
        if self.name.0.trim().is_empty() {
            return Err(invalid("the log name cannot be empty"));
        }
        if self.directory.is_some() && self.max_files == 0 {
            return Err(invalid("max_files must be greater than zero"));
        }
        Ok(())
    }

    fn file_layer<S>(&self, directory: &Path) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some(format!("Failed to create log directory {}", directory.display()).into()),
        })?;

        let appender = RollingFileAppender::builder()
            .rotation(rotation(self.rotation))
            .filename_prefix(self.name.0.as_str())
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(self.max_files)
            .build(directory)?;
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let file = layer().with_writer(writer).with_ansi(false);
        let file = if self.json { file.json().boxed() } else { file.boxed() };
        Ok((file, guard))
    }
}

/// Keeps the file writer alive; dropping it flushes and stops the worker thread.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// A builder with the defaults of [`LoggingConfig`]: console on, `info`, daily
    /// rotation keeping 10 plain-text files once a directory is set.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        let defaults = LoggingConfig::default();
        LoggerBuilder {
            name: Unnamed,
            level: LevelFilter::INFO,
            filter: defaults.filter,
            console: true,
            directory: defaults.directory,
            rotation: defaults.rotation,
            max_files: defaults.max_files,
            json: defaults.json,
        }
    }

    /// Installs the subscriber described by the `[logging]` settings section, with
    /// the console always on. `verbose` forces the `debug` level.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an unknown level name, otherwise as
    /// [`LoggerBuilder::init`].
    pub fn from_settings(
        name: impl Into<String>,
        settings: &LoggingConfig,
        verbose: bool,
    ) -> Result<Self, LoggerError> {
        let level = if verbose { LevelFilter::DEBUG } else { parse_level(&settings.level)? };
        let mut builder = Self::builder()
            .name(name)
            .level(level)
            .rotation(settings.rotation)
            .max_files(settings.max_files)
            .json(settings.json);
        if let Some(directives) = &settings.filter {
            builder = builder.filter(directives.as_str());
        }
        if let Some(directory) = &settings.directory {
            builder = builder.directory(directory);
        }
        builder.init()
    }

    /// The file writer's guard, present when a directory was configured.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

/// Parses a level name (`trace` .. `error`, or `off`), case-insensitively.
///
/// # Errors
/// [`LoggerError::InvalidConfiguration`] naming the rejected value.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{level}': {e}").into(),
        context: None,
    })
}

const fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

fn env_filter(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid filter '{directives}': {e}").into(),
                context: None,
            }
        }),
        None => Ok(builder.from_env_lossy()),
    }
}

fn console_layer<S>() -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_from_logging_defaults() {
        let builder = Logger::builder().name("szflags");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert_eq!(builder.rotation, LogRotation::Daily);
        assert_eq!(builder.max_files, 10);
        assert!(builder.directory.is_none());
        assert!(builder.filter.is_none());
        assert!(!builder.json);
    }

    #[test]
    fn file_options_are_recorded() {
        let builder = Logger::builder()
            .name("szflags")
            .directory("/var/log/szflags")
            .rotation(LogRotation::Hourly)
            .max_files(3)
            .json(true)
            .filter("szflags_domain=debug")
            .level(LevelFilter::WARN);

        assert_eq!(builder.directory.as_deref(), Some(Path::new("/var/log/szflags")));
        assert_eq!(rotation(builder.rotation), Rotation::HOURLY);
        assert_eq!(builder.max_files, 3);
        assert!(builder.json);
        assert_eq!(builder.filter.as_deref(), Some("szflags_domain=debug"));
        assert_eq!(builder.level, LevelFilter::WARN);
    }

    #[test]
    fn rotation_names_map_to_appender_rotation() {
        assert_eq!(rotation(LogRotation::Minutely), Rotation::MINUTELY);
        assert_eq!(rotation(LogRotation::Daily), Rotation::DAILY);
        assert_eq!(rotation(LogRotation::Never), Rotation::NEVER);
    }

    #[test]
    fn level_names() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
        assert!(matches!(parse_level("loud"), Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn unusable_setups_are_rejected_before_install() {
        let empty_name = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(empty_name, LoggerError::InvalidConfiguration { .. }));

        let silent = Logger::builder().name("silent").console(false).init().unwrap_err();
        assert!(silent.to_string().contains("no output enabled"));

        let no_files =
            Logger::builder().name("szflags").directory("logs").max_files(0).init().unwrap_err();
        assert!(no_files.to_string().contains("max_files"));

        let bad_filter =
            Logger::builder().name("szflags").filter("szflags=loud").init().unwrap_err();
        assert!(bad_filter.to_string().contains("Invalid filter"));
    }
}
