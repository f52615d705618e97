//! # infixa
//!
//! infixa is a line-oriented evaluator for integer arithmetic expressions
//! written in infix notation. It recognizes an expression against a fixed
//! grammar while tokenizing it, converts the token stream to postfix order,
//! and evaluates the result on a value stack, reporting syntax errors with
//! exact column positions and arithmetic failures as tagged outcomes.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator, recognizer};

/// Provides unified error types for recognition and evaluation.
///
/// This module defines all errors that can be raised while recognizing or
/// evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including error kinds and 1-based
/// column positions for syntax errors.
///
/// # Responsibilities
/// - Defines error enums for both failure phases (recognizer, evaluator).
/// - Attaches column numbers to syntax errors for precise messages.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the recognition and evaluation of expressions.
///
/// This module ties together the token model, the recognizer, and the
/// evaluator to provide a complete pipeline from raw expression text to a
/// numeric result. It exposes the public API for parsing and evaluating
/// single expressions.
///
/// # Responsibilities
/// - Coordinates the core components: tokens, recognizer, and evaluator.
/// - Provides entry points for parsing and evaluating expression text.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates a single expression line and returns its value.
///
/// The line is first recognized against the expression grammar, producing a
/// token sequence, which is then converted to postfix order and evaluated.
/// Recognition failures and arithmetic failures both surface as boxed
/// errors; the evaluator is never invoked when recognition fails.
///
/// # Errors
/// Returns an error if the line is not a well-formed expression, if a
/// division or modulo by zero occurs, or if an intermediate result leaves
/// the supported integer range.
///
/// # Examples
/// ```
/// use infixa::evaluate_line;
///
/// // Precedence and grouping behave as usual.
/// assert_eq!(evaluate_line("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(evaluate_line("(2 + 3) * 4").unwrap(), 20);
///
/// // Arithmetic failures are reported, not panicked on.
/// assert!(evaluate_line("5 / 0").is_err());
///
/// // So are syntax errors, with the column in the message.
/// assert!(evaluate_line("1 +").is_err());
/// ```
pub fn evaluate_line(line: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let tokens = recognizer::parse(line)?;
    let value = evaluator::evaluate(&tokens)?;
    Ok(value)
}
