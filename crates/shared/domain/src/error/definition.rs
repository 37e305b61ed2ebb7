use std::borrow::Cow;

/// A catalog that cannot be built because its declarations are inconsistent.
///
/// These are programming errors in the flag table, never runtime conditions.
#[szflags_derive::flag_error]
#[derive(Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Duplicate flag name{}: {name}", format_context(.context))]
    DuplicateFlag { name: String, context: Option<Cow<'static, str>> },

    #[error("Duplicate usage group name{}: {name}", format_context(.context))]
    DuplicateGroup { name: String, context: Option<Cow<'static, str>> },

    #[error("Flag {flag} references unknown usage group{}: {group}", format_context(.context))]
    UnknownGroup { flag: String, group: String, context: Option<Cow<'static, str>> },

    /// Aggregate members must be declared before the aggregate itself.
    #[error("Aggregate {flag} references undeclared flag{}: {member}", format_context(.context))]
    UnknownMember { flag: String, member: String, context: Option<Cow<'static, str>> },

    #[error("Flag {flag} uses bit {bit} outside the 64-bit mask{}", format_context(.context))]
    BitOutOfRange { flag: String, bit: u32, context: Option<Cow<'static, str>> },

    #[error("Base flag {flag} belongs to no usage group{}", format_context(.context))]
    Ungrouped { flag: String, context: Option<Cow<'static, str>> },

    #[error(
        "Flags {first} and {second} share value {value:#018X} in usage group {group}{}",
        format_context(.context)
    )]
    DuplicateValue {
        group: String,
        first: String,
        second: String,
        value: u64,
        context: Option<Cow<'static, str>>,
    },

    #[error(
        "Aggregate {flag} includes {member} which is not valid in usage group {group}{}",
        format_context(.context)
    )]
    MemberOutsideGroup {
        flag: String,
        member: String,
        group: String,
        context: Option<Cow<'static, str>>,
    },

    #[error(
        "Asymmetric membership between flag {flag} and usage group {group}{}: {detail}",
        format_context(.context)
    )]
    AsymmetricMembership {
        flag: String,
        group: String,
        detail: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
}
