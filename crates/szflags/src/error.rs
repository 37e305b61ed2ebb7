use std::borrow::Cow;

/// Errors raised while initializing the flag registry.
#[szflags_derive::flag_error]
pub enum RegistryError {
    #[error("Flag metadata could not be loaded{}: {source}", format_context(.context))]
    Metadata { source: szflags_metadata::MetadataError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "validation")]
    #[error("Flag representations are inconsistent{}: {source}", format_context(.context))]
    Validation {
        source: szflags_validation::ValidationError,
        context: Option<Cow<'static, str>>,
    },
}
