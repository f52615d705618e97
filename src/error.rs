/// Recognition errors.
///
/// Defines all error types that can occur while scanning and recognizing an
/// expression. Parse errors include syntax mistakes, ill-formed or
/// out-of-range integer literals, and any other issue detected before
/// evaluation, each located by a 1-based column.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include division by zero, numeric overflow of the supported
/// integer range, and malformed token streams that violate the recognizer's
/// contract.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
