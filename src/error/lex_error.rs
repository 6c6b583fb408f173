#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A character that does not begin any token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
}

impl LexError {
    /// Byte offset in the input where scanning failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f,
                       "Error at position {position}: Unrecognized character {character:?}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
