/// The error returned by parsing.
///
/// Wraps either a lexing or a parsing failure so both can be propagated with
/// `?` through a single `Result` type.
pub mod core;
/// Lexing errors.
///
/// Raised when the scanner meets a character that starts no token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all grammar violations the parser can detect: missing operands,
/// unbalanced parentheses, empty input and trailing tokens.
pub mod parse_error;

pub use self::core::Error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
