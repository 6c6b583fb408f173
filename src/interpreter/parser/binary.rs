use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            primary::parse_factor,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `a - b - c`
/// becomes `(a - b) - c`.
///
/// The rule is: `expr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an operand.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    tokens.enter("expr")?;
    let mut left = parse_multiplicative(tokens)?;
    loop {
        let op = match token_to_binary_operator(&tokens.peek()?.token) {
            Some(op @ (BinaryOperator::Add | BinaryOperator::Subtract)) => op,
            _ => break,
        };
        tokens.advance()?;
        let right = parse_multiplicative(tokens)?;
        left = Expr::binary(op, left, right);
    }
    tokens.exit("expr")?;
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// `+` and `-`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an operand.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    tokens.enter("term")?;
    let mut left = parse_factor(tokens)?;
    loop {
        let op = match token_to_binary_operator(&tokens.peek()?.token) {
            Some(op @ (BinaryOperator::Multiply | BinaryOperator::Divide)) => op,
            _ => break,
        };
        tokens.advance()?;
        let right = parse_factor(tokens)?;
        left = Expr::binary(op, left, right);
    }
    tokens.exit("term")?;
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers, parentheses and end of input.
///
/// # Example
/// ```
/// use exprtree::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::RParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Subtract),
        Token::Star => Some(BinaryOperator::Multiply),
        Token::Slash => Some(BinaryOperator::Divide),
        _ => None,
    }
}
