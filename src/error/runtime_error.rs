#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum RuntimeError {
    /// Attempted division or modulo by zero.
    DivisionByZero,
    /// An operation produced a value outside the supported integer range.
    NumericOverflow,
    /// The token stream violated the recognizer's contract (for example, an
    /// operator without two operands). Recognized input never triggers this.
    MalformedExpression,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::NumericOverflow => write!(f,
                                            "Numeric overflow while trying to compute the result."),

            Self::MalformedExpression => write!(f, "Expression is malformed."),
        }
    }
}

impl std::error::Error for RuntimeError {}
