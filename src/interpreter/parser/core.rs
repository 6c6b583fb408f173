use crate::{
    ast::Expr,
    error::{Error, LexError, ParseError},
    interpreter::{
        lexer::{Lexer, Spanned, Token},
        parser::{binary::parse_additive, trace::Tracer},
    },
};

pub type ParseResult<T> = Result<T, Error>;

/// Default limit on how deeply parentheses may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configures and runs a parse of one input string.
///
/// Each call to [`Parser::parse`] scans the input with a fresh lexer, so a
/// `Parser` can be reused and shared freely.
///
/// ## Example
/// ```
/// use exprtree::interpreter::parser::core::Parser;
///
/// let parser = Parser::new("12 * (5 - 6)").debug(false);
///
/// assert_eq!(parser.parsed().unwrap(), "12.0 5.0 6.0 - *");
/// assert_eq!(parser.evaluate().unwrap(), -12.0);
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    source:    &'src str,
    debug:     bool,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { source,
               debug: false,
               max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Turns the rule-by-rule trace on or off.
    ///
    /// Trace records go to the `exprtree::trace` log target and have no effect
    /// on the resulting tree.
    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Sets how deeply parentheses may nest before parsing fails with
    /// [`ParseError::NestingTooDeep`].
    #[must_use]
    pub const fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    /// Parses the whole input into an expression tree.
    ///
    /// # Errors
    /// Returns [`Error::Lex`] on an unrecognized character and
    /// [`Error::Parse`] on any grammar violation.
    pub fn parse(&self) -> ParseResult<Expr> {
        let mut tokens = TokenStream::new(self.source, Tracer::new(self.debug), self.max_depth);
        parse_expression(&mut tokens)
    }

    /// Parses the input and renders the tree in postfix form.
    ///
    /// # Errors
    /// Same as [`Parser::parse`].
    pub fn parsed(&self) -> ParseResult<String> {
        self.parse().map(|expr| expr.render())
    }

    /// Parses the input and evaluates the tree.
    ///
    /// # Errors
    /// Same as [`Parser::parse`].
    pub fn evaluate(&self) -> ParseResult<f64> {
        self.parse().map(|expr| expr.evaluate())
    }
}

/// A token source with one token of lookahead.
///
/// Tokens are pulled from the lexer only when a rule asks for them, so a
/// lexing error surfaces at the point the parser reaches it.
pub struct TokenStream<'src> {
    lexer:     Lexer<'src>,
    lookahead: Option<Spanned>,
    tracer:    Tracer,
    nesting:   usize,
    max_depth: usize,
}

impl<'src> TokenStream<'src> {
    #[must_use]
    pub fn new(source: &'src str, tracer: Tracer, max_depth: usize) -> Self {
        Self { lexer: Lexer::new(source),
               lookahead: None,
               tracer,
               nesting: 0,
               max_depth }
    }

    fn pull(&mut self) -> Result<Spanned, LexError> {
        self.lexer.next().unwrap_or_else(|| {
                              let end = self.lexer.source().len();
                              Ok(Spanned { token: Token::Eof,
                                           span:  end..end, })
                          })
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> ParseResult<&Spanned> {
        let next = match self.lookahead.take() {
            Some(spanned) => spanned,
            None => self.pull()?,
        };
        Ok(self.lookahead.insert(next))
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> ParseResult<Spanned> {
        let next = match self.lookahead.take() {
            Some(spanned) => spanned,
            None => self.pull()?,
        };
        self.tracer.consume(&next);
        Ok(next)
    }

    pub(in crate::interpreter::parser) fn enter(&mut self, rule: &'static str) -> ParseResult<()> {
        if self.tracer.is_enabled() {
            let lookahead = self.peek()?.clone();
            self.tracer.enter(rule, &lookahead);
        }
        Ok(())
    }

    pub(in crate::interpreter::parser) fn exit(&mut self, rule: &'static str) -> ParseResult<()> {
        if self.tracer.is_enabled() {
            let lookahead = self.peek()?.clone();
            self.tracer.exit(rule, &lookahead);
        }
        Ok(())
    }

    /// Records entry into a parenthesized group opened at `position`.
    pub(in crate::interpreter::parser) fn open_group(&mut self, position: usize) -> ParseResult<()> {
        if self.nesting >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    position }.into());
        }
        self.nesting += 1;
        Ok(())
    }

    pub(in crate::interpreter::parser) const fn close_group(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It rejects empty input,
/// descends through the precedence hierarchy starting at the lowest level
/// (`+` and `-`), and then requires that nothing but end of input remains.
///
/// Grammar: `eval := expr EOF`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the input.
///
/// # Returns
/// The root of the parsed expression tree.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    if tokens.peek()?.token == Token::Eof {
        return Err(ParseError::EmptyInput.into());
    }

    let expr = parse_additive(tokens)?;

    let next = tokens.peek()?;
    match next.token {
        Token::Eof => Ok(expr),
        token => Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                            position: next.position(), }.into()),
    }
}
