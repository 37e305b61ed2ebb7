use std::borrow::Cow;

/// Error types specific to loading flag metadata.
///
/// Record-level variants carry the zero-based position of the offending record in
/// the source array and, when it could be read, its symbol.
#[szflags_derive::flag_error]
pub enum MetadataError {
    /// The source is not a JSON array of objects.
    #[error("Malformed metadata source{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Metadata file could not be read{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// A record is missing a mandatory field or has a field of the wrong shape.
    #[error("Malformed metadata record #{index}{}: {reason}", format_context(.context))]
    MalformedRecord { index: usize, reason: String, context: Option<Cow<'static, str>> },

    #[error("Record #{index} ({symbol}) has an unreadable value{}: {text}", format_context(.context))]
    InvalidValue { index: usize, symbol: String, text: String, context: Option<Cow<'static, str>> },

    #[error("Record #{index} repeats symbol {symbol}{}", format_context(.context))]
    DuplicateSymbol { index: usize, symbol: String, context: Option<Cow<'static, str>> },

    #[error("Record #{index} ({symbol}) uses bit {bit} outside the 64-bit mask{}", format_context(.context))]
    BitOutOfRange { index: usize, symbol: String, bit: u32, context: Option<Cow<'static, str>> },

    #[error(
        "Record #{index} ({symbol}) lists bits {bits_mask:#018X} but value {value:#018X}{}",
        format_context(.context)
    )]
    ValueMismatch {
        index: usize,
        symbol: String,
        bits_mask: u64,
        value: u64,
        context: Option<Cow<'static, str>>,
    },

    #[error("Record #{index} ({symbol}) lists unknown sub-flag{}: {flag}", format_context(.context))]
    UnknownSubFlag {
        index: usize,
        symbol: String,
        flag: String,
        context: Option<Cow<'static, str>>,
    },

    /// Neither an aggregate nor a single-bit base flag.
    #[error(
        "Record #{index} ({symbol}) is neither a base flag nor an aggregate{}",
        format_context(.context)
    )]
    Unclassifiable { index: usize, symbol: String, context: Option<Cow<'static, str>> },

    /// An aggregate whose value is not the OR of its (flattened) sub-flags.
    #[error(
        "Record #{index} ({symbol}) has value {value:#018X} but its sub-flags OR to {expected:#018X}{}",
        format_context(.context)
    )]
    AggregateValueMismatch {
        index: usize,
        symbol: String,
        expected: u64,
        value: u64,
        context: Option<Cow<'static, str>>,
    },
}
