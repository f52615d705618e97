use crate::{
    error::ParseError,
    interpreter::{
        recognizer::cursor::{Cursor, TerminalSymbol},
        token::{BinaryOperator, Token},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The terminal symbols that map to binary operators, tried in order.
const OPERATORS: [(TerminalSymbol, BinaryOperator); 6] =
    [(TerminalSymbol::Plus, BinaryOperator::Add),
     (TerminalSymbol::Minus, BinaryOperator::Sub),
     (TerminalSymbol::Times, BinaryOperator::Mul),
     (TerminalSymbol::Slash, BinaryOperator::Div),
     (TerminalSymbol::Mod, BinaryOperator::Mod),
     (TerminalSymbol::Circumflex, BinaryOperator::Pow)];

/// Recognizes a whole expression line and returns its token sequence.
///
/// This is the recognizer's entry point. The expression is validated
/// against the grammar:
///
/// ```text
/// expr           := term { ("+"|"-"|"*"|"/"|"%"|"^") term };
/// term           := "(" expr ")" | integer;
/// integer        := "0" | ["-"]* natural_number;
/// natural_number := nonzero_digit { digit };
/// ```
///
/// The grammar is deliberately flat: it checks syntax only, and leaves
/// precedence and associativity to the evaluator. Tokens are emitted as
/// input is consumed; on any failure the partial token sequence is
/// discarded, so a caller can never evaluate half an expression.
///
/// # Errors
/// Returns a [`ParseError`] carrying the 1-based column of the failure.
///
/// # Examples
/// ```
/// use infixa::{error::ParseError, interpreter::recognizer::parse};
///
/// let tokens = parse("1 + 2").unwrap();
/// assert_eq!(tokens.len(), 3);
///
/// // A second term with no operator in between is extraneous.
/// assert_eq!(parse("1 2"), Err(ParseError::ExtraneousSymbol { col: 3 }));
/// ```
pub fn parse(expr: &str) -> ParseResult<Vec<Token>> {
    let mut cursor = Cursor::new(expr);
    let mut tokens = Vec::new();

    cursor.skip_ws();
    if cursor.at_end() {
        return Err(ParseError::UnexpectedEndOfInput { col: cursor.column() });
    }

    expression(&mut cursor, &mut tokens)?;

    cursor.skip_ws();
    if !cursor.at_end() {
        return Err(ParseError::ExtraneousSymbol { col: cursor.column() });
    }

    Ok(tokens)
}

/// Recognizes and consumes an expression.
///
/// Production rule: `expr := term { ("+"|"-"|"*"|"/"|"%"|"^") term };`
///
/// An expression is a term, optionally followed by any number of
/// operator/term pairs. An operator with no term after it at the end of
/// the input is reported as a missing term rather than a bad integer.
fn expression(cursor: &mut Cursor<'_>, tokens: &mut Vec<Token>) -> ParseResult<()> {
    cursor.skip_ws();
    term(cursor, tokens)?;

    while let Some(op) = accept_operator(cursor) {
        tokens.push(Token::Operator(op));

        if let Err(err) = term(cursor, tokens) {
            if let ParseError::IllFormedInteger { col } = err {
                if cursor.at_end() {
                    return Err(ParseError::MissingTerm { col });
                }
            }
            return Err(err);
        }
    }

    Ok(())
}

/// Tries to consume one binary operator, skipping leading whitespace.
fn accept_operator(cursor: &mut Cursor<'_>) -> Option<BinaryOperator> {
    for (symbol, op) in OPERATORS {
        if cursor.expect(symbol) {
            return Some(op);
        }
    }
    None
}

/// Recognizes and consumes a term.
///
/// Production rule: `term := "(" expr ")" | integer;`
///
/// A term is either a parenthesized sub-expression or a single integer
/// literal. Literals are range-checked here: a lexically well-formed
/// integer outside the 16-bit signed range fails with the column of the
/// term's first character.
fn term(cursor: &mut Cursor<'_>, tokens: &mut Vec<Token>) -> ParseResult<()> {
    cursor.skip_ws();
    let start = cursor.pos();

    if cursor.expect(TerminalSymbol::OpeningScope) {
        tokens.push(Token::OpeningScope);
        expression(cursor, tokens)?;

        if !cursor.expect(TerminalSymbol::ClosingScope) {
            return Err(ParseError::MissingClosingParen { col: cursor.column() });
        }
        tokens.push(Token::ClosingScope);

        return Ok(());
    }

    let text = integer(cursor)?;
    let value = text.parse::<i16>()
                    .map_err(|_| ParseError::IntegerOutOfRange { col: start + 1 })?;
    tokens.push(Token::operand(text, value));

    Ok(())
}

/// Recognizes and consumes an integer literal, returning its text.
///
/// Production rule: `integer := "0" | ["-"]* natural_number;`
///
/// An integer is a lone zero or a natural number preceded by any run of
/// minus signs. The run is folded by count into the literal text: an even
/// count cancels out, an odd count keeps exactly one minus, so `--5` reads
/// as `5` and `---5` as `-5`.
fn integer(cursor: &mut Cursor<'_>) -> ParseResult<String> {
    if cursor.accept(TerminalSymbol::Zero) {
        return Ok("0".to_string());
    }

    let mut minus_count = 0_usize;
    while cursor.expect(TerminalSymbol::Minus) {
        minus_count += 1;
    }

    let digits = natural_number(cursor)?;

    if minus_count % 2 == 1 {
        Ok(format!("-{digits}"))
    } else {
        Ok(digits.to_string())
    }
}

/// Recognizes and consumes a natural number, returning its digits.
///
/// Production rule: `natural_number := nonzero_digit { digit };`
fn natural_number<'a>(cursor: &mut Cursor<'a>) -> ParseResult<&'a str> {
    let start = cursor.pos();

    if !cursor.accept(TerminalSymbol::NonZeroDigit) {
        return Err(ParseError::IllFormedInteger { col: cursor.column() });
    }

    while digit(cursor) {}

    Ok(cursor.consumed_since(start))
}

/// Consumes a single digit.
///
/// Production rule: `digit := "0" | nonzero_digit;`
fn digit(cursor: &mut Cursor<'_>) -> bool {
    cursor.accept(TerminalSymbol::Zero) || cursor.accept(TerminalSymbol::NonZeroDigit)
}
