use std::borrow::Cow;
use szflags_derive::flag_error;

#[flag_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown flag{}: {name}", format_context(.context))]
    UnknownFlag { name: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_bit(text: &str) -> Result<u32, DemoError> {
    text.parse::<u32>().context("Parsing bit index")
}

fn lookup(name: &str) -> Result<u64, DemoError> {
    Err(DemoError::UnknownFlag { name: name.to_owned(), context: None })
        .context("Resolving flag name")
}

fn main() {
    let err = parse_bit("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (Parsing bit index)"));

    let err = lookup("SZ_NOPE").unwrap_err();
    assert_eq!(err.to_string(), "Unknown flag (Resolving flag name): SZ_NOPE");

    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");
}
