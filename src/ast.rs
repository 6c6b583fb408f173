/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is either a numeric leaf or a binary operation that owns both of its
/// operands. Trees are built once by the parser and never mutated afterwards,
/// so a tree can be evaluated or rendered any number of times with identical
/// results.
///
/// Chains such as `1 + 1 + ... + 1` produce trees as deep as the input is
/// long, so every walk over a tree (evaluation, rendering, comparison and
/// dropping) uses an explicit stack instead of recursion.
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary operation node from its operator and operands.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add, Expr::Number(1.0), Expr::Number(2.0));
    ///
    /// assert_eq!(expr.evaluate(), 3.0);
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns `true` for numeric leaves.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Number of edges on the longest path from this node to a leaf.
    ///
    /// ## Example
    /// ```
    /// let expr = exprtree::parse("1 + 2 * 3").unwrap();
    ///
    /// assert_eq!(expr.depth(), 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((expr, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Self::BinaryOp { left, right, .. } = expr {
                pending.push((&**left, level + 1));
                pending.push((&**right, level + 1));
            }
        }
        deepest
    }
}

impl PartialEq for Expr {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Number(a), Self::Number(b)) => {
                    if a != b {
                        return false;
                    }
                },
                (Self::BinaryOp { op: op_a,
                                  left: left_a,
                                  right: right_a, },
                 Self::BinaryOp { op: op_b,
                                  left: left_b,
                                  right: right_b, }) => {
                    if op_a != op_b {
                        return false;
                    }
                    pending.push((&**right_a, &**right_b));
                    pending.push((&**left_a, &**left_b));
                },
                _ => return false,
            }
        }
        true
    }
}

/// Shows the tree in its postfix form, e.g. `Expr(1.0 2.0 +)`.
impl std::fmt::Debug for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Expr").field(&format_args!("{self}")).finish()
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        detach_children(self, &mut detached);
        // Each detached node is dropped with only leaf children left.
        while let Some(mut node) = detached.pop() {
            detach_children(&mut node, &mut detached);
        }
    }
}

fn detach_children(expr: &mut Expr, detached: &mut Vec<Box<Expr>>) {
    if let Expr::BinaryOp { left, right, .. } = expr {
        for child in [left, right] {
            if !child.is_leaf() {
                detached.push(std::mem::replace(child, Box::new(Expr::Number(0.0))));
            }
        }
    }
}

/// The four arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Divide, Multiply, Subtract};
        let operator = match self {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
        };
        write!(f, "{operator}")
    }
}
