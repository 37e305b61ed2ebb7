//! Facade crate for the flag registry.
//! Re-exports domain/kernel primitives and composes one-shot registry initialization.
//! Keep this crate thin: it should compose other crates, not implement flag logic.
//!
//! ## Usage
//! - Call [`registry`] once at startup with the loaded settings; later calls return
//!   the same instance.
//! - Work with [`Registry::catalog`] to build flag sets and masks.

mod error;

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use szflags_domain as domain;
pub use szflags_domain::{Catalog, Flag, FlagKind, FlagSet, SzFlags, UsageGroup, algebra, standard};
pub use szflags_kernel as kernel;
pub use szflags_metadata as metadata;
#[cfg(feature = "validation")]
pub use szflags_validation as validation;

use std::sync::OnceLock;
use szflags_domain::config::Settings;
use szflags_metadata::MetadataModel;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "catalog",
        "metadata",
        #[cfg(feature = "validation")]
        "validation",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// The process-wide flag registry: the standard catalog and the metadata describing it.
#[derive(Debug)]
pub struct Registry {
    catalog: &'static Catalog,
    metadata: MetadataModel,
}

impl Registry {
    #[must_use]
    pub const fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn metadata(&self) -> &MetadataModel {
        &self.metadata
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Initializes the registry on first call and returns it on every call.
///
/// The metadata comes from `settings.metadata.path` when set, the bundled copy
/// otherwise. With the `validation` feature the three flag representations are
/// cross-checked first and any discrepancy aborts initialization. Settings passed
/// after the first successful call are ignored.
///
/// # Errors
/// * [`RegistryError::Metadata`] if the metadata cannot be loaded.
/// * [`RegistryError::Validation`] if the representations disagree.
pub fn registry(settings: &Settings) -> Result<&'static Registry, RegistryError> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }

    let catalog = standard::catalog();
    let metadata = match &settings.metadata.path {
        Some(path) => szflags_metadata::load_file(path)?,
        None => szflags_metadata::standard()?.clone(),
    };

    #[cfg(feature = "validation")]
    szflags_validation::validate_with(&metadata, &settings.validation)
        .into_result()
        .context("Registry initialization")?;

    tracing::info!(
        flags = catalog.flags().len(),
        groups = catalog.groups().len(),
        records = metadata.len(),
        "Flag registry initialized"
    );

    Ok(REGISTRY.get_or_init(|| Registry { catalog, metadata }))
}
