/// The evaluator module computes the value of a recognized expression.
///
/// The evaluator consumes the token sequence produced by the recognizer,
/// reorders it from infix to postfix with an operator stack, and folds the
/// postfix sequence over a value stack to a single integer result. It is
/// the execution engine of the pipeline.
///
/// # Responsibilities
/// - Converts infix token sequences to postfix order (shunting-yard).
/// - Applies each operator with explicit division-by-zero and range checks.
/// - Reports runtime errors such as division by zero or numeric overflow.
pub mod evaluator;
/// The recognizer module validates and tokenizes expression text.
///
/// The recognizer reads the raw expression one character at a time,
/// checking it against the expression grammar while emitting tokens for
/// each operand, operator, and parenthesis it consumes. This is the first
/// stage of the pipeline and the only producer of tokens.
///
/// # Responsibilities
/// - Classifies input characters into the grammar's terminal symbols.
/// - Validates grammar conformity with recursive-descent productions.
/// - Reports syntax errors with exact 1-based column positions.
pub mod recognizer;
/// The token module defines the vocabulary shared by both phases.
///
/// This module declares the token type emitted by the recognizer and read
/// by the evaluator, along with the enumerated binary operator tag and its
/// precedence and associativity tables.
///
/// # Responsibilities
/// - Defines the `Token` enum covering operands, operators, and scopes.
/// - Defines the closed `BinaryOperator` set with total precedence and
///   associativity functions.
/// - Renders tokens back to their surface text for display.
pub mod token;
