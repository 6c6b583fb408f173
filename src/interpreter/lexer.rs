use std::ops::Range;

use logos::Logos;

use crate::error::LexError;

/// Raw tokens recognized by the `logos`-based scanner.
///
/// Whitespace is skipped here; end of input is added by [`Lexer`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\f\r\n]+")]
enum LogosToken {
    /// Numeric literal tokens, such as `42` or `3.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

fn parse_number(lex: &logos::Lexer<LogosToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal, such as `42` or `3.5`.
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input.
    Eof,
}

impl Token {
    /// The grammar name of this token's kind, as used in trace output.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Eof => "EOF",
        }
    }
}

impl From<LogosToken> for Token {
    fn from(value: LogosToken) -> Self {
        match value {
            LogosToken::Number(n) => Self::Number(n),
            LogosToken::Plus => Self::Plus,
            LogosToken::Minus => Self::Minus,
            LogosToken::Star => Self::Star,
            LogosToken::Slash => Self::Slash,
            LogosToken::LParen => Self::LParen,
            LogosToken::RParen => Self::RParen,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A token together with the byte range it covers in the input.
#[derive(Debug, PartialEq, Clone)]
pub struct Spanned {
    pub token: Token,
    pub span:  Range<usize>,
}

impl Spanned {
    /// Byte offset where the token starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }
}

/// Lazily scans an input string into [`Spanned`] tokens.
///
/// The sequence always ends with exactly one [`Token::Eof`], unless scanning
/// fails, in which case the [`LexError`] is the last item. A lexer cannot be
/// rewound; create a new one to scan the input again.
///
/// ## Example
/// ```
/// use exprtree::interpreter::lexer::{Lexer, Token};
///
/// let tokens: Vec<Token> = Lexer::new("12 * (5 - 6)").map(|t| t.unwrap().token)
///                                                    .collect();
///
/// assert_eq!(tokens,
///            vec![Token::Number(12.0),
///                 Token::Star,
///                 Token::LParen,
///                 Token::Number(5.0),
///                 Token::Minus,
///                 Token::Number(6.0),
///                 Token::RParen,
///                 Token::Eof]);
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, LogosToken>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    LogosToken::lexer(source),
               finished: false, }
    }

    /// The full input being scanned.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }

    fn unrecognized(&self) -> LexError {
        let position = self.inner.span().start;
        let character = self.source()[position..].chars().next().unwrap_or('\u{fffd}');
        LexError::UnrecognizedCharacter { character, position }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.inner.next() {
            Some(Ok(token)) => Some(Ok(Spanned { token: token.into(),
                                                 span:  self.inner.span(), })),
            Some(Err(())) => {
                self.finished = true;
                Some(Err(self.unrecognized()))
            },
            None => {
                self.finished = true;
                let end = self.source().len();
                Some(Ok(Spanned { token: Token::Eof,
                                  span:  end..end, }))
            },
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
