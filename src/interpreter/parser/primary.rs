use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            core::{ParseResult, TokenStream},
        },
    },
};

const OPERAND: &str = "operand";

/// Parses a factor: a number or a parenthesized expression.
///
/// There is no unary minus; a `-` in operand position is reported as an
/// unexpected token.
///
/// Grammar:
/// ```text
///     factor := NUMBER
///             | "(" expr ")"
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an operand.
///
/// # Returns
/// The parsed [`Expr`] or a `ParseError` on failure.
pub fn parse_factor(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    tokens.enter("factor")?;
    let peeked = tokens.peek()?.clone();
    let expr = match peeked.token {
        Token::Number(value) => {
            tokens.advance()?;
            Expr::Number(value)
        },
        Token::LParen => parse_grouping(tokens)?,
        Token::Eof => {
            return Err(ParseError::UnexpectedEndOfInput { expected: OPERAND,
                                                          position: peeked.position(), }.into());
        },
        token => {
            return Err(ParseError::UnexpectedToken { expected: OPERAND,
                                                     found:    token.to_string(),
                                                     position: peeked.position(), }.into());
        },
    };
    tokens.exit("factor")?;
    Ok(expr)
}

/// Parses `"(" expr ")"`.
///
/// The parentheses leave no trace in the tree; they only steer how the inner
/// expression groups.
fn parse_grouping(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let open = tokens.advance()?;
    tokens.open_group(open.position())?;

    let inner = parse_additive(tokens)?;

    let close = tokens.peek()?.clone();
    match close.token {
        Token::RParen => {
            tokens.advance()?;
            tokens.close_group();
            Ok(inner)
        },
        Token::Eof => Err(ParseError::UnclosedParen { opened_at: open.position(),
                                                      position:  close.position(), }.into()),
        token => Err(ParseError::UnexpectedToken { expected: "')'",
                                                   found:    token.to_string(),
                                                   position: close.position(), }.into()),
    }
}
