use szflags_derive::flag_error;

#[flag_error]
pub enum DemoError {
    #[error("Bad bit: {inner}")]
    BadBit {
        #[from]
        inner: std::num::ParseIntError,
    },
}

fn main() {}
