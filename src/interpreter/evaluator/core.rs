use crate::{
    error::EvalError,
    interpreter::{evaluator::binary::expression, lexer::Lexer},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing why the expression was abandoned.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates `source` as a single arithmetic expression.
///
/// A fresh [`Lexer`] is created for every call, so no state is shared between
/// evaluations. The expression must span the whole input; anything left after
/// it is rejected rather than ignored.
///
/// # Errors
/// - [`EvalError::UnexpectedToken`] for misplaced tokens, unmatched
///   parentheses or empty input.
/// - [`EvalError::TrailingInput`] if tokens follow a complete expression.
/// - [`EvalError::LexError`] for characters that do not form a token.
/// - [`EvalError::QuitRequested`] if `quit` appears where a value is expected.
///
/// # Example
/// ```
/// use calcium::interpreter::evaluator::core::evaluate_expression;
///
/// assert_eq!(evaluate_expression("1 + 2 * 3").unwrap(), 7.0);
/// assert!(evaluate_expression("1 + 2 3").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> EvalResult<f64> {
    let mut lexer = Lexer::new(source);
    lexer.advance()?;
    let value = expression(&mut lexer)?;
    expect_end(&lexer)?;
    log::debug!("evaluated {source:?} to {value}");
    Ok(value)
}

/// Checks that the lexer has no tokens left.
///
/// # Errors
/// Returns [`EvalError::TrailingInput`] naming the first leftover token.
pub fn expect_end(lexer: &Lexer<'_>) -> EvalResult<()> {
    if lexer.at_end() {
        Ok(())
    } else {
        Err(EvalError::TrailingInput { token:  lexer.describe(),
                                       offset: lexer.offset(), })
    }
}
