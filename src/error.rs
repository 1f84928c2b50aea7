/// Errors collected by the parser; each renders with a `(line N)` prefix.
pub mod parse_error;
/// Errors raised during evaluation; each renders into the message carried
/// by an `ERROR` value.
pub mod runtime_error;

pub use self::parse_error::ParseError;
pub use self::runtime_error::RuntimeError;
