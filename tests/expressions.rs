use std::fs;

use infixa::{
    error::{ParseError, RuntimeError},
    evaluate_line,
    interpreter::{
        evaluator::{evaluate, to_postfix},
        recognizer::parse,
        token::Token,
    },
};

fn assert_value(src: &str, expected: i64) {
    let tokens = parse(src).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));
    match evaluate(&tokens) {
        Ok(value) => assert_eq!(value, expected, "'{src}' evaluated to the wrong value"),
        Err(e) => panic!("'{src}' failed to evaluate: {e}"),
    }
}

fn assert_parse_error(src: &str, expected: ParseError) {
    assert_eq!(parse(src), Err(expected), "'{src}' did not fail as expected");
}

fn assert_runtime_error(src: &str, expected: RuntimeError) {
    let tokens = parse(src).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));
    assert_eq!(evaluate(&tokens), Err(expected), "'{src}' did not fail as expected");
}

fn operand_texts(src: &str) -> Vec<String> {
    parse(src).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"))
              .iter()
              .filter_map(|t| match t {
                  Token::Operand { text, .. } => Some(text.clone()),
                  _ => None,
              })
              .collect()
}

#[test]
fn single_operands_round_trip_across_the_whole_range() {
    for n in i16::MIN..=i16::MAX {
        let src = n.to_string();
        let tokens = parse(&src).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));

        assert_eq!(tokens.len(), 1, "'{src}' produced more than one token");
        match &tokens[0] {
            Token::Operand { text, value } => {
                assert_eq!(*value, n);
                assert_eq!(text.parse::<i16>(), Ok(n));
            },
            other => panic!("'{src}' produced a non-operand token: {other:?}"),
        }
    }
}

#[test]
fn blank_input_is_unexpected_end() {
    assert_parse_error("", ParseError::UnexpectedEndOfInput { col: 1 });
    assert_parse_error("   ", ParseError::UnexpectedEndOfInput { col: 4 });
    assert_parse_error("\t", ParseError::UnexpectedEndOfInput { col: 2 });
}

#[test]
fn operator_without_a_term_is_missing_term() {
    assert_parse_error("1+", ParseError::MissingTerm { col: 3 });
    assert_parse_error("1 *", ParseError::MissingTerm { col: 4 });
    assert_parse_error("1- -", ParseError::MissingTerm { col: 5 });
}

#[test]
fn unbalanced_parentheses_are_reported() {
    assert_parse_error("(1+2", ParseError::MissingClosingParen { col: 5 });
    assert_parse_error("((1+2)", ParseError::MissingClosingParen { col: 7 });
    assert_parse_error("1+(2", ParseError::MissingClosingParen { col: 5 });
}

#[test]
fn trailing_symbols_are_extraneous_and_discard_tokens() {
    assert_parse_error("1 2", ParseError::ExtraneousSymbol { col: 3 });
    assert_parse_error("1$", ParseError::ExtraneousSymbol { col: 2 });
    assert_parse_error("05", ParseError::ExtraneousSymbol { col: 2 });
    assert_parse_error("(1+2))", ParseError::ExtraneousSymbol { col: 6 });
}

#[test]
fn literals_outside_the_16_bit_range_are_rejected() {
    assert_parse_error("99999", ParseError::IntegerOutOfRange { col: 1 });
    assert_parse_error("32768", ParseError::IntegerOutOfRange { col: 1 });
    assert_parse_error(" 40000", ParseError::IntegerOutOfRange { col: 2 });
    assert_parse_error("1+99999", ParseError::IntegerOutOfRange { col: 3 });
    assert_parse_error("9999999999999999999999", ParseError::IntegerOutOfRange { col: 1 });

    // The extremes themselves still fit.
    assert_value("32767", 32767);
    assert_value("-32768", -32768);
}

#[test]
fn stray_characters_are_rejected_not_skipped() {
    assert_parse_error("$", ParseError::IllFormedInteger { col: 1 });
    assert_parse_error("1+a", ParseError::IllFormedInteger { col: 3 });
    assert_parse_error("1++2", ParseError::IllFormedInteger { col: 3 });
    assert_parse_error("()", ParseError::IllFormedInteger { col: 2 });
    assert_parse_error("-0", ParseError::IllFormedInteger { col: 2 });
}

#[test]
fn precedence_and_grouping() {
    assert_value("2+3*4", 14);
    assert_value("(2+3)*4", 20);
    assert_value("2*3+4", 10);
    assert_value("10-2-3", 5);
    assert_value("2+3%2", 3);
    assert_value("((2))", 2);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2^3^2", 512);
    assert_value("(2^3)^2", 64);
    assert_value("2^10", 1024);
    assert_value("-2 ^ 3", -8);
}

#[test]
fn minus_runs_fold_by_count() {
    assert_eq!(operand_texts("--5"), ["5"]);
    assert_eq!(operand_texts("---5"), ["-5"]);
    assert_eq!(operand_texts("- - 5"), ["5"]);
    assert_value("--5", 5);
    assert_value("---5", -5);
    assert_value("2--5", 7);
}

#[test]
fn division_and_modulo_truncate_toward_zero() {
    assert_value("7/2", 3);
    assert_value("-7/2", -3);
    assert_value("7%3", 1);
    assert_value("-7%3", -1);
    assert_value("2^-1", 0);
}

#[test]
fn zero_divisors_are_runtime_errors() {
    assert_runtime_error("5/0", RuntimeError::DivisionByZero);
    assert_runtime_error("5%0", RuntimeError::DivisionByZero);
    assert_runtime_error("1/(2-2)", RuntimeError::DivisionByZero);
}

#[test]
fn results_outside_the_16_bit_range_overflow() {
    assert_runtime_error("30000+30000", RuntimeError::NumericOverflow);
    assert_runtime_error("-30000-30000", RuntimeError::NumericOverflow);
    assert_runtime_error("2^100", RuntimeError::NumericOverflow);

    // The first oversized intermediate result aborts the evaluation, even
    // when the rest of the expression would bring it back in range.
    assert_runtime_error("30000+30000-30000", RuntimeError::NumericOverflow);
}

#[test]
fn parsing_is_idempotent() {
    let first = parse("(2+3)*4").unwrap();
    let second = parse("(2+3)*4").unwrap();
    assert_eq!(first, second);
}

#[test]
fn postfix_order_matches_precedence() {
    let to_strings = |src: &str| -> Vec<String> {
        to_postfix(&parse(src).unwrap()).iter()
                                        .map(ToString::to_string)
                                        .collect()
    };

    assert_eq!(to_strings("2+3*4"), ["2", "3", "4", "*", "+"]);
    assert_eq!(to_strings("(2+3)*4"), ["2", "3", "+", "4", "*"]);
    assert_eq!(to_strings("2^3^2"), ["2", "3", "2", "^", "^"]);
}

#[test]
fn a_failing_line_does_not_poison_the_next() {
    assert!(evaluate_line("5/0").is_err());
    assert_eq!(evaluate_line("5/5").unwrap(), 1);
    assert!(evaluate_line("1+").is_err());
    assert_eq!(evaluate_line("1+1").unwrap(), 2);
}

#[test]
fn parse_errors_render_their_column() {
    let err = parse("1 2").unwrap_err();
    assert_eq!(err.column(), 3);
    assert!(err.to_string().contains("column 3"));
}

#[test]
fn example_file_evaluates_line_by_line() {
    let contents = fs::read_to_string("tests/example.expr").expect("missing file");

    for line in contents.lines() {
        if let Err(e) = evaluate_line(line) {
            panic!("'{line}' failed: {e}");
        }
    }
}
