/// Represents a binary operator.
///
/// The set is closed: every operator the recognizer can emit is listed
/// here, so precedence and associativity are total functions and no code
/// ever needs to re-inspect the operator's source character.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Returns the operator's precedence level.
    ///
    /// Higher values bind tighter. Exponentiation sits above the
    /// multiplicative operators, which sit above the additive ones.
    ///
    /// ## Example
    /// ```
    /// use infixa::interpreter::token::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Mul.precedence());
    /// assert_eq!(BinaryOperator::Div.precedence(), BinaryOperator::Mod.precedence());
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 3,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// Returns `true` when the operator groups from the right.
    ///
    /// Only exponentiation is right-associative: `2 ^ 3 ^ 2` groups as
    /// `2 ^ (3 ^ 2)`.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// Represents a token in a recognized expression.
///
/// A token is the minimal meaningful unit the recognizer extracts from the
/// expression text. Tokens are produced only by the recognizer and are
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An integer literal.
    Operand {
        /// The literal text, with any run of leading minus signs folded to
        /// at most one.
        text:  String,
        /// The parsed value, guaranteed to be in range by the recognizer.
        value: i16,
    },
    /// One of the binary operators.
    Operator(BinaryOperator),
    /// `(`
    OpeningScope,
    /// `)`
    ClosingScope,
}

impl Token {
    /// Builds an operand token from a literal and its parsed value.
    #[must_use]
    pub const fn operand(text: String, value: i16) -> Self {
        Self::Operand { text, value }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand { text, .. } => write!(f, "{text}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpeningScope => write!(f, "("),
            Self::ClosingScope => write!(f, ")"),
        }
    }
}
