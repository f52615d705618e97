use crate::interpreter::token::{BinaryOperator, Token};

/// An entry on the shunting-yard operator stack.
///
/// Keeping opening scopes as their own variant encodes the "a scope never
/// outranks an operator" rule structurally instead of assigning it a
/// sentinel precedence.
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Open,
    Op(BinaryOperator),
}

/// Reorders a recognized infix token sequence into postfix order.
///
/// This is a pure transform over the token sequence:
/// - operands go straight to the output;
/// - an opening scope is stacked, and its closing scope pops and emits
///   every stacked operator above it, discarding the pair;
/// - an operator pops and emits stacked operators of strictly higher
///   precedence, or of equal precedence when the incoming operator is
///   left-associative, then stacks itself;
/// - at the end of input the remaining operators are drained in order.
///
/// Token sequences produced by the recognizer are always balanced; if a
/// stray scope token shows up anyway, the drain loops simply run out of
/// stack instead of panicking, and the evaluation pass reports the
/// malformed stream.
///
/// # Examples
/// ```
/// use infixa::interpreter::{evaluator::to_postfix, recognizer::parse};
///
/// let infix = parse("2 + 3 * 4").unwrap();
/// let postfix: Vec<String> = to_postfix(&infix).iter().map(ToString::to_string).collect();
///
/// assert_eq!(postfix, ["2", "3", "4", "*", "+"]);
/// ```
#[must_use]
pub fn to_postfix(infix: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(infix.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in infix {
        match token {
            Token::Operand { .. } => output.push(token.clone()),

            Token::OpeningScope => stack.push(StackEntry::Open),

            Token::ClosingScope => {
                while let Some(entry) = stack.pop() {
                    match entry {
                        StackEntry::Open => break,
                        StackEntry::Op(op) => output.push(Token::Operator(op)),
                    }
                }
            },

            Token::Operator(incoming) => {
                while let Some(StackEntry::Op(top)) = stack.last() {
                    if !pops_before(*top, *incoming) {
                        break;
                    }
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(StackEntry::Op(*incoming));
            },
        }
    }

    while let Some(entry) = stack.pop() {
        if let StackEntry::Op(op) = entry {
            output.push(Token::Operator(op));
        }
    }

    output
}

/// Whether the stacked operator must be emitted before the incoming one.
///
/// Equal precedence defers to associativity: a left-associative incoming
/// operator yields to the stacked one, a right-associative incoming
/// operator stacks on top of it.
const fn pops_before(top: BinaryOperator, incoming: BinaryOperator) -> bool {
    if top.precedence() == incoming.precedence() {
        return !incoming.is_right_associative();
    }
    top.precedence() > incoming.precedence()
}
