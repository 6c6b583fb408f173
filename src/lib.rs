//! # exprtree
//!
//! exprtree parses arithmetic expressions into a tree and evaluates them.
//! Expressions consist of decimal numbers, the operators `+`, `-`, `*` and
//! `/`, and parentheses, with the usual precedence and left associativity.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{ast::Expr, error::Error, interpreter::parser::core::Parser};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum, a closed sum type of numeric leaves
/// and binary operations. The tree is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines the node and operator types.
/// - Guarantees by construction that every binary node owns two operands.
pub mod ast;
/// Provides error types for lexing and parsing.
///
/// This module defines all errors that can be raised while turning text into
/// a tree. Evaluation itself cannot fail.
///
/// # Responsibilities
/// - Defines error enums for the lexer and the parser.
/// - Attaches byte positions and the expected construct to each failure.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, the parser and the evaluator and
/// exposes the [`Parser`] builder for callers that need tracing or a custom
/// nesting limit.
pub mod interpreter;

/// Parses an expression into a tree.
///
/// # Errors
/// Returns [`Error::Lex`] when the input contains a character that starts no
/// token, and [`Error::Parse`] when the tokens do not form an expression.
///
/// # Examples
/// ```
/// let expr = exprtree::parse("12 * (5 - 6)").unwrap();
/// assert_eq!(expr.evaluate(), -12.0);
/// assert_eq!(expr.render(), "12.0 5.0 6.0 - *");
///
/// assert!(exprtree::parse("(1 + 2").unwrap_err().is_parse());
/// assert!(exprtree::parse("1 $ 2").unwrap_err().is_lex());
/// ```
pub fn parse(input: &str) -> Result<Expr, Error> {
    Parser::new(input).parse()
}

/// Parses and evaluates an expression in one step.
///
/// # Errors
/// Same as [`parse`].
///
/// # Examples
/// ```
/// assert_eq!(exprtree::evaluate("10 - 2 - 3").unwrap(), 5.0);
/// assert_eq!(exprtree::evaluate("1 / 0").unwrap(), f64::INFINITY);
/// ```
pub fn evaluate(input: &str) -> Result<f64, Error> {
    Parser::new(input).evaluate()
}
