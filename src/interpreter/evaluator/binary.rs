use crate::ast::BinaryOperator;

impl BinaryOperator {
    /// Applies the operator to two already evaluated operands.
    ///
    /// Arithmetic is plain `f64` arithmetic. In particular division by zero is
    /// not an error: it follows IEEE-754 and produces `inf`, `-inf` or `NaN`
    /// (for `0 / 0`), which Rust guarantees on every target.
    ///
    /// # Example
    /// ```
    /// use exprtree::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Subtract.apply(10.0, 2.0), 8.0);
    /// assert_eq!(BinaryOperator::Divide.apply(1.0, 0.0), f64::INFINITY);
    /// assert_eq!(BinaryOperator::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
    /// assert!(BinaryOperator::Divide.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub const fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}
