#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the flag registry crates.
//!
//! The only macro today is [`macro@flag_error`], which turns a plain enum into the
//! error shape every crate in the workspace uses: `thiserror` display strings, an
//! optional human context per variant and `?`-friendly conversions.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless the enum already derives them.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant that wraps a source error.
/// * `From<SourceError>` for variants with a `source` field (or `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant is present.
/// * A module-private `format_context` helper for the `#[error(...)]` strings, so
///   declare at most one such enum per module.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant must use named fields.
/// 3. Variants with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[szflags_derive::flag_error]
/// pub enum MetadataError {
///     #[error("Malformed metadata{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal metadata error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(text: &str) -> Result<Vec<Record>, MetadataError> {
///     serde_json::from_str(text).context("Parsing metadata source")
/// }
/// ```
#[proc_macro_attribute]
pub fn flag_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
