use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level settings shared by the loader, the validator and the CLI.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsInner {
    pub metadata: MetadataConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped settings for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(flatten, default)]
    inner: Arc<SettingsInner>,
}

impl Deref for Settings {
    type Target = SettingsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Settings {
    fn deref_mut(&mut self) -> &mut SettingsInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the metadata description lives; `None` selects the bundled copy.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    pub path: Option<PathBuf>,
}

/// Name mapping between legacy constants and symbolic flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Only constants starting with this prefix are cross-checked.
    pub legacy_prefix: String,
    /// Replaces `legacy_prefix` to form the expected flag name.
    pub symbolic_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Per-target directives such as `szflags_metadata=debug`; `RUST_LOG` applies when unset.
    pub filter: Option<String>,
    /// Write log files as JSON lines.
    pub json: bool,
    /// Rolling log files are written here when set; console only otherwise.
    pub directory: Option<PathBuf>,
    pub rotation: LogRotation,
    /// Rotated files kept on disk.
    pub max_files: usize,
}

/// How often a new log file is started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

// --- Default ---

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { legacy_prefix: "SZ_".to_owned(), symbolic_prefix: "SZ_".to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            json: false,
            directory: None,
            rotation: LogRotation::Daily,
            max_files: 10,
        }
    }
}
