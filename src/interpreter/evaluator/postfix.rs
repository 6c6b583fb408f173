use crate::ast::{BinaryOperator, Expr};

/// One element of a tree's postfix (RPN) sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixItem {
    /// A numeric leaf.
    Number(f64),
    /// An operator, emitted after both of its operands.
    Operator(BinaryOperator),
}

enum Step<'a> {
    Visit(&'a Expr),
    Emit(BinaryOperator),
}

/// Iterator over a tree in postfix order: left operand, right operand,
/// operator.
///
/// The walk keeps its own stack on the heap, so trees as deep as the input is
/// long never exhaust the call stack.
pub struct Postfix<'a> {
    pending: Vec<Step<'a>>,
}

impl Iterator for Postfix<'_> {
    type Item = PostfixItem;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.pending.pop()? {
                Step::Visit(Expr::Number(value)) => return Some(PostfixItem::Number(*value)),
                Step::Visit(Expr::BinaryOp { op, left, right }) => {
                    self.pending.push(Step::Emit(*op));
                    self.pending.push(Step::Visit(right));
                    self.pending.push(Step::Visit(left));
                },
                Step::Emit(op) => return Some(PostfixItem::Operator(op)),
            }
        }
    }
}

impl Expr {
    /// Walks the tree in postfix order.
    ///
    /// # Example
    /// ```
    /// use exprtree::{ast::BinaryOperator, interpreter::evaluator::postfix::PostfixItem};
    ///
    /// let expr = exprtree::parse("1 - 2").unwrap();
    /// let items: Vec<PostfixItem> = expr.postfix().collect();
    ///
    /// assert_eq!(items,
    ///            vec![PostfixItem::Number(1.0),
    ///                 PostfixItem::Number(2.0),
    ///                 PostfixItem::Operator(BinaryOperator::Subtract)]);
    /// ```
    #[must_use]
    pub fn postfix(&self) -> Postfix<'_> {
        Postfix { pending: vec![Step::Visit(self)] }
    }
}
