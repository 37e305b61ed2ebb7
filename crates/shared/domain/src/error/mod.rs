//! Errors raised while defining or querying a catalog.

mod definition;
mod lookup;

pub use self::definition::{DefinitionError, DefinitionErrorExt};
pub use self::lookup::{LookupError, LookupErrorExt};
