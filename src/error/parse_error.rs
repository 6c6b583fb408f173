#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// Every variant except [`ParseError::EmptyInput`] records the byte offset at
/// which parsing failed.
pub enum ParseError {
    /// The input contained no tokens at all.
    EmptyInput,
    /// Found a token where a different construct was required.
    UnexpectedToken {
        /// The construct the parser was looking for.
        expected: &'static str,
        /// The token encountered.
        found:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input while a construct was still required.
    UnexpectedEndOfInput {
        /// The construct the parser was looking for.
        expected: &'static str,
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A `(` was never closed by a matching `)`.
    UnclosedParen {
        /// Byte offset of the opening parenthesis.
        opened_at: usize,
        /// Byte offset where the `)` was expected.
        position:  usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of that token.
        position: usize,
    },
    /// Parentheses were nested deeper than the parser allows.
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Byte offset of the parenthesis that crossed the limit.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the input where parsing failed, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::UnclosedParen { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. } => Some(*position),
        }
    }

    /// The construct the parser expected when it failed.
    #[must_use]
    pub const fn expected(&self) -> &'static str {
        match self {
            Self::EmptyInput => "expression",
            Self::UnexpectedToken { expected, .. } | Self::UnexpectedEndOfInput { expected, .. } => {
                *expected
            },
            Self::UnclosedParen { .. } => "')'",
            Self::UnexpectedTrailingTokens { .. } => "end of input",
            Self::NestingTooDeep { .. } => "shallower nesting",
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Empty input, expected an expression."),

            Self::UnexpectedToken { expected, found, position } => write!(f,
                                                                          "Error at position {position}: Expected {expected}, found {found}."),

            Self::UnexpectedEndOfInput { expected, position } => write!(f,
                                                                        "Error at position {position}: Unexpected end of input, expected {expected}."),

            Self::UnclosedParen { opened_at, position } => write!(f,
                                                                  "Error at position {position}: Expected closing parenthesis ')' for '(' at position {opened_at} but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at position {position}: Extra tokens after expression. Check your input: {token}"),

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at position {position}: Parentheses nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
