#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while recognizing an expression.
///
/// Every variant carries the 1-based column where the error was detected.
/// Errors that fire after the input ran out point just past the last
/// consumed character; errors caused by a concrete character point at that
/// character directly.
pub enum ParseError {
    /// The input ended (or was blank) where an expression was required.
    UnexpectedEndOfInput {
        /// The column just past the last consumed character.
        col: usize,
    },
    /// A character that cannot start an integer was found where one was
    /// required.
    IllFormedInteger {
        /// The column of the offending character.
        col: usize,
    },
    /// An operator was not followed by a term.
    MissingTerm {
        /// The column where the term should have started.
        col: usize,
    },
    /// A symbol was found after an otherwise valid expression.
    ExtraneousSymbol {
        /// The column of the extraneous symbol.
        col: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    MissingClosingParen {
        /// The column just past the last consumed character.
        col: usize,
    },
    /// An integer literal does not fit the supported 16-bit signed range.
    IntegerOutOfRange {
        /// The column of the first character of the literal.
        col: usize,
    },
}

impl ParseError {
    /// Gets the column number from `self`.
    ///
    /// ## Example
    /// ```
    /// use infixa::error::ParseError;
    ///
    /// let err = ParseError::MissingTerm { col: 3 };
    ///
    /// assert_eq!(err.column(), 3);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedEndOfInput { col }
            | Self::IllFormedInteger { col }
            | Self::MissingTerm { col }
            | Self::ExtraneousSymbol { col }
            | Self::MissingClosingParen { col }
            | Self::IntegerOutOfRange { col } => *col,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput { col } => {
                write!(f, "Error at column {col}: Unexpected end of input.")
            },

            Self::IllFormedInteger { col } => {
                write!(f, "Error at column {col}: Ill-formed integer.")
            },

            Self::MissingTerm { col } => {
                write!(f, "Error at column {col}: Missing term after operator.")
            },

            Self::ExtraneousSymbol { col } => write!(f,
                                                     "Error at column {col}: Extraneous symbol after valid expression."),

            Self::MissingClosingParen { col } => write!(f,
                                                        "Error at column {col}: Expected closing parenthesis ')' but none found."),

            Self::IntegerOutOfRange { col } => {
                write!(f, "Error at column {col}: Integer constant out of range.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
