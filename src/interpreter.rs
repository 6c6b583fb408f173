/// The evaluator module reduces expression trees to numbers and renders them.
///
/// The evaluator traverses the AST bottom-up, applying each operator to its
/// already evaluated operands. It also provides the postfix rendering used to
/// show a parsed tree.
///
/// # Responsibilities
/// - Evaluates AST nodes with `f64` arithmetic.
/// - Renders trees in postfix (RPN) notation.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw input and produces a lazy stream of tokens:
/// numbers, the four operators, parentheses and end of input. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte spans.
/// - Skips whitespace between tokens.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer on demand and constructs a tree
/// that encodes operator precedence and left associativity.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates the grammar, reporting errors with byte positions.
/// - Optionally traces its progress through the `log` facade.
pub mod parser;
