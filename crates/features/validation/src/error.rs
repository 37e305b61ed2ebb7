use std::borrow::Cow;

/// Error types specific to cross-validation.
#[szflags_derive::flag_error]
pub enum ValidationError {
    /// The three representations disagree; `summary` lists every discrepancy.
    #[error("{count} flag discrepancies found{}:\n{summary}", format_context(.context))]
    Inconsistent { count: usize, summary: String, context: Option<Cow<'static, str>> },

    #[error("Flag metadata unavailable{}: {source}", format_context(.context))]
    Metadata { source: szflags_metadata::MetadataError, context: Option<Cow<'static, str>> },
}
