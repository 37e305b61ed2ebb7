use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use szflags_domain::config::Settings;
use tracing::{debug, info};

/// Environment variable prefix; `SZFLAGS__LOGGING__LEVEL` maps to `logging.level`.
pub const ENV_PREFIX: &str = "SZFLAGS";

/// Settings file looked up in the working directory when no path is given.
/// Any extension the `config` crate understands is accepted (`szflags.toml`, `szflags.yaml`, ...).
pub const DEFAULT_SETTINGS_FILE: &str = "szflags";

/// Custom error type for config loading.
#[szflags_derive::flag_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest precedence first:
/// 1. **File**: `path` when given (must exist), otherwise the optional `szflags.*` file
///    in the working directory.
/// 2. **Environment**: variables prefixed with `SZFLAGS__`; nested keys use double
///    underscores (e.g. `SZFLAGS__VALIDATION__LEGACY_PREFIX`).
///
/// # Errors
/// This function will return an error if:
/// * An explicit `path` does not exist or cannot be parsed.
/// * The merged values do not match the structure of `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    layered(path, environment())
}

/// Loads [`Settings`]; a missing default file yields the built-in defaults.
///
/// # Errors
/// See [`load_config`].
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<Settings, ConfigError> {
    load_config::<Settings>(path)
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake)
}

fn layered<T>(path: Option<impl AsRef<Path>>, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(environment);

    if required {
        info!("Loading config from {}", effective_path.display());
    } else {
        debug!("Looking for optional config {}", effective_path.display());
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_overrides_defaults() {
        let mut vars = config::Map::new();
        vars.insert("SZFLAGS__LOGGING__LEVEL".to_owned(), "trace".to_owned());
        vars.insert("SZFLAGS__VALIDATION__SYMBOLIC_PREFIX".to_owned(), "SZ_".to_owned());
        vars.insert("SZFLAGS__VALIDATION__LEGACY_PREFIX".to_owned(), "G2_".to_owned());

        let settings: Settings = layered(None::<&str>, environment().source(Some(vars))).unwrap();
        assert_eq!(settings.logging.level, "trace");
        assert_eq!(settings.validation.legacy_prefix, "G2_");
        assert!(!settings.logging.json);
    }
}
