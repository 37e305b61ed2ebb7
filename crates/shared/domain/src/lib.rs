//! # Flag Domain
//!
//! Pure flag-registry types with no I/O: the [`Catalog`] of named flags, the
//! [`UsageGroup`]s they are valid in, the [`FlagSet`] algebra that packs them into
//! the 64-bit mask handed to the engine, and the built-in [`standard`] catalog.
//!
//! ```rust
//! use szflags_domain::{algebra, standard};
//!
//! let catalog = standard::catalog();
//! let set = catalog.parse_flags(["SZ_ENTITY_INCLUDE_ENTITY_NAME", "SZ_WITH_INFO"]).unwrap();
//! assert_eq!(algebra::to_mask(Some(&set)), (1 << 12) | (1 << 62));
//! ```

pub mod algebra;
pub mod catalog;
pub mod config;
pub mod error;
pub mod flag;
pub mod format;
pub mod group;
pub mod set;
pub mod standard;

pub use crate::catalog::{Catalog, CatalogBuilder};
pub use crate::error::{DefinitionError, LookupError};
pub use crate::flag::{Flag, FlagKind};
pub use crate::group::UsageGroup;
pub use crate::set::FlagSet;
pub use crate::standard::SzFlags;
