use std::borrow::Cow;

/// A name that does not resolve against a catalog.
#[szflags_derive::flag_error]
#[derive(Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown flag{}: {name}", format_context(.context))]
    UnknownFlag { name: String, context: Option<Cow<'static, str>> },

    #[error("Unknown usage group{}: {name}", format_context(.context))]
    UnknownGroup { name: String, context: Option<Cow<'static, str>> },
}
