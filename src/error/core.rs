use crate::error::{LexError, ParseError};

/// Either a lexing or a parsing failure.
///
/// Both abort the parse immediately; no partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input contained a character that starts no token.
    Lex(LexError),
    /// The tokens did not form a valid expression.
    Parse(ParseError),
}

impl Error {
    /// Returns `true` if this is a lexing failure.
    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self, Self::Lex(_))
    }

    /// Returns `true` if this is a parsing failure.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Byte offset in the input where the failure occurred, if known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => e.position(),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}
