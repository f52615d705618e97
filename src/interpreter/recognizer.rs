/// Character classification and scan-position tracking.
///
/// Defines the grammar's terminal symbols and the cursor that walks the
/// expression text one character at a time, exposing the peek/accept
/// vocabulary the grammar productions are written in.
pub mod cursor;

/// The grammar productions of the recognizer.
///
/// Implements the recursive-descent productions for expressions, terms,
/// and integers, emitting tokens as input is consumed and reporting
/// syntax errors with exact column positions.
pub mod grammar;

pub use grammar::{parse, ParseResult};
