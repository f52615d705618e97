use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::postfix::to_postfix,
        token::{BinaryOperator, Token},
    },
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a recognized infix token sequence to a single value.
///
/// The sequence is first reordered into postfix form, then folded over a
/// value stack. Operands within the sequence are 16-bit values; the
/// accumulator is 64-bit so an out-of-range intermediate result is
/// detected and reported rather than wrapped.
///
/// # Errors
/// - `DivisionByZero` for a division or modulo with a zero right operand.
/// - `NumericOverflow` when any operation's result leaves the 16-bit
///   signed range.
/// - `MalformedExpression` if the token sequence violates the
///   recognizer's contract. Sequences obtained from the recognizer never
///   trigger this.
///
/// # Examples
/// ```
/// use infixa::{
///     error::RuntimeError,
///     interpreter::{evaluator::evaluate, recognizer::parse},
/// };
///
/// let tokens = parse("2 ^ 3 ^ 2").unwrap();
/// assert_eq!(evaluate(&tokens), Ok(512));
///
/// let tokens = parse("5 % 0").unwrap();
/// assert_eq!(evaluate(&tokens), Err(RuntimeError::DivisionByZero));
/// ```
pub fn evaluate(infix: &[Token]) -> EvalResult<i64> {
    let postfix = to_postfix(infix);
    evaluate_postfix(&postfix)
}

/// Folds a postfix token sequence over a value stack.
///
/// Operands push their value; an operator pops the right operand, then the
/// left, and pushes the checked result back. A well-formed sequence leaves
/// exactly one value on the stack.
fn evaluate_postfix(postfix: &[Token]) -> EvalResult<i64> {
    let mut values: Vec<i64> = Vec::new();

    for token in postfix {
        match token {
            Token::Operand { value, .. } => values.push(i64::from(*value)),

            Token::Operator(op) => {
                let right = values.pop().ok_or(RuntimeError::MalformedExpression)?;
                let left = values.pop().ok_or(RuntimeError::MalformedExpression)?;
                values.push(apply_operator(*op, left, right)?);
            },

            Token::OpeningScope | Token::ClosingScope => {
                return Err(RuntimeError::MalformedExpression);
            },
        }
    }

    let result = values.pop().ok_or(RuntimeError::MalformedExpression)?;
    if values.is_empty() {
        Ok(result)
    } else {
        Err(RuntimeError::MalformedExpression)
    }
}

/// Applies one binary operator to its two operands.
///
/// Every result is range-checked against the 16-bit signed bound before it
/// is allowed back onto the value stack, so no computed value can ever
/// exceed the width an operand is allowed.
fn apply_operator(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Pow => eval_pow(left, right)?,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left / right
        },
        BinaryOperator::Mod => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left % right
        },
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
    };

    if result > i64::from(i16::MAX) || result < i64::from(i16::MIN) {
        return Err(RuntimeError::NumericOverflow);
    }

    Ok(result)
}

/// Evaluates an exponentiation.
///
/// Non-negative exponents use checked integer exponentiation, so an
/// accumulator overflow surfaces as `NumericOverflow`. Negative exponents
/// are computed in floating point and truncated toward zero, which yields
/// 0, 1, or -1 for every base of magnitude at least one.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn eval_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    if exponent < 0 {
        // A zero base would produce an infinity here; the saturating cast
        // turns it into a value the range check rejects.
        let raised = (base as f64).powi(exponent as i32);
        return Ok(raised.trunc() as i64);
    }

    let exponent = u32::try_from(exponent).map_err(|_| RuntimeError::NumericOverflow)?;
    base.checked_pow(exponent)
        .ok_or(RuntimeError::NumericOverflow)
}
