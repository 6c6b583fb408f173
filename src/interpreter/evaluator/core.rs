use crate::{ast::Expr, interpreter::evaluator::postfix::PostfixItem};

impl Expr {
    /// Evaluates the tree and returns the resulting value.
    ///
    /// For every binary node the left operand is evaluated before the right
    /// one, and both before the operator is applied. Evaluation cannot fail:
    /// division by zero yields infinity or NaN (see
    /// [`BinaryOperator::apply`](crate::ast::BinaryOperator::apply)).
    ///
    /// Operands are kept on an explicit stack, so the depth of the tree is
    /// not limited by the call stack. The tree is only borrowed, so
    /// evaluating it again gives the same value.
    ///
    /// # Example
    /// ```
    /// let expr = exprtree::parse("2 + 3 * 4").unwrap();
    ///
    /// assert_eq!(expr.evaluate(), 14.0);
    /// assert_eq!(expr.evaluate(), 14.0);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        let mut operands = Vec::new();
        for item in self.postfix() {
            match item {
                PostfixItem::Number(value) => operands.push(value),
                PostfixItem::Operator(op) => {
                    let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                        unreachable!("every operator follows its two operands");
                    };
                    operands.push(op.apply(left, right));
                },
            }
        }
        operands.pop()
                .unwrap_or_else(|| unreachable!("a tree always reduces to one value"))
    }
}
