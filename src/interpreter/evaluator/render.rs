use std::fmt::{self, Display, Formatter};

use crate::{ast::Expr, interpreter::evaluator::postfix::PostfixItem};

impl Expr {
    /// Renders the tree in postfix (RPN) form.
    ///
    /// A number renders as its plain decimal value (see [`format_number`]).
    /// A binary node renders as `"<left> <right> <op>"`. Postfix text needs no
    /// parentheses, so the grouping of the input is fully captured by token
    /// order.
    ///
    /// # Example
    /// ```
    /// let expr = exprtree::parse("(2 + 3) * 4").unwrap();
    ///
    /// assert_eq!(expr.render(), "2.0 3.0 + 4.0 *");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Formats a number in plain decimal notation, never with an exponent.
///
/// Whole numbers keep a trailing `.0`. Finite output is always a valid
/// numeric literal for the lexer.
///
/// # Example
/// ```
/// use exprtree::interpreter::evaluator::render::format_number;
///
/// assert_eq!(format_number(-12.0), "-12.0");
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(1e23), "100000000000000000000000.0");
/// assert_eq!(format_number(1e-7), "0.0000001");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, item) in self.postfix().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match item {
                PostfixItem::Number(value) => f.write_str(&format_number(value))?,
                PostfixItem::Operator(op) => write!(f, "{op}")?,
            }
        }
        Ok(())
    }
}
