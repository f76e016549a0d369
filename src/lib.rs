//! # calcium
//!
//! calcium is an arithmetic expression calculator written in Rust.
//! It tokenizes and evaluates expressions built from numbers, the four basic
//! operators, parentheses and unary signs, and can drive an interactive
//! session of `;`-terminated statements.

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

use crate::{
    error::EvalError,
    interpreter::evaluator::core::evaluate_expression,
    util::format::{DEFAULT_PRECISION, format_value},
};

/// Provides the error type shared by the lexer, the evaluator and the
/// session driver.
///
/// # Responsibilities
/// - Names every way an evaluation can be abandoned.
/// - Keeps the `quit` request apart from genuine failures.
/// - Carries byte offsets so messages can point into the input.
pub mod error;
/// Orchestrates lexing, evaluation and interactive sessions.
///
/// # Responsibilities
/// - Turns text into tokens with one token of lookahead.
/// - Evaluates expressions directly from the token stream.
/// - Runs the statement-per-line read-evaluate-print loop.
pub mod interpreter;
/// General helpers used by the library and the binary.
///
/// # Responsibilities
/// - Renders results with a fixed number of decimals.
pub mod util;

/// Evaluates a single arithmetic expression.
///
/// The whole of `source` must be one expression; no `;` terminator is
/// expected. Every call starts from a fresh lexer.
///
/// # Errors
/// Returns an [`EvalError`] if the input is not a valid expression, or
/// [`EvalError::QuitRequested`] if it asks to quit.
///
/// # Examples
/// ```
/// use calcium::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("(1 + 2) * 3").unwrap(), 9.0);
/// assert_eq!(evaluate("--5").unwrap(), 5.0);
/// assert_eq!(evaluate("1 / 0").unwrap(), f64::INFINITY);
/// assert!(matches!(evaluate("(1 + 2"), Err(EvalError::UnexpectedToken { .. })));
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvalError> {
    evaluate_expression(source)
}

/// Evaluates a single arithmetic expression and renders the result with two
/// decimals.
///
/// # Errors
/// Same as [`evaluate`].
///
/// # Examples
/// ```
/// use calcium::get_result;
///
/// assert_eq!(get_result("1 + 2 * 3").unwrap(), "7.00");
/// assert_eq!(get_result("10 / 4").unwrap(), "2.50");
/// assert!(get_result("1 + 2 3").is_err());
/// ```
pub fn get_result(source: &str) -> Result<String, EvalError> {
    evaluate(source).map(|value| format_value(value, DEFAULT_PRECISION))
}
