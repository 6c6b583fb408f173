/// Tree evaluation.
///
/// Walks the tree bottom-up, left operand first, and reduces it to an `f64`.
pub mod core;

/// Binary operator evaluation.
///
/// Applies the four arithmetic operators with IEEE-754 semantics.
pub mod binary;

/// Postfix traversal shared by evaluation and rendering.
pub mod postfix;

/// Postfix (RPN) rendering of expression trees.
pub mod render;
