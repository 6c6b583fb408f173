/// Entry points, the [`core::Parser`] builder and the token stream.
///
/// Holds the lookahead buffer shared by every grammar rule and the checks that
/// apply to the input as a whole: empty input and trailing tokens.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels:
/// `+`/`-` and `*`/`/`.
pub mod binary;

/// Operand parsing: numbers and parenthesized sub-expressions.
pub mod primary;

/// Optional diagnostic trace of rule entry, rule exit and token consumption.
pub mod trace;
