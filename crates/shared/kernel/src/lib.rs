//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it owns settings loading and re-exports the domain.
//!
//! ## Settings loading
//! ```rust,no_run
//! use szflags_kernel::config::load_settings;
//!
//! let settings = load_settings(None::<&str>).unwrap();
//! assert_eq!(settings.validation.legacy_prefix, "SZ_");
//! ```
pub mod config;

pub use szflags_domain as domain;
