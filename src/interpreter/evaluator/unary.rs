use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{binary::expression, core::EvalResult},
        lexer::{Lexer, Token},
    },
};

/// Identifier that asks the driver to end the session.
pub const QUIT: &str = "quit";

/// Evaluates a factor, the highest precedence level.
///
/// Unary signs recurse into `factor` itself, so they bind tighter than any
/// binary operator and stack: `--x` is `-(-x)`. Each group and sign counts
/// as one level of nesting, limited to
/// [`MAX_DEPTH`](crate::interpreter::lexer::MAX_DEPTH).
///
/// Grammar:
/// ```text
///     factor := NUMBER
///             | "(" expression ")"
///             | "+" factor
///             | "-" factor
///             | "quit"
/// ```
/// # Parameters
/// - `lexer`: Cursor positioned at the first token of the factor.
///
/// # Returns
/// The value of the factor.
///
/// # Errors
/// - [`EvalError::QuitRequested`] for the identifier `quit`.
/// - [`EvalError::NestingTooDeep`] when groups and signs nest too deeply.
/// - [`EvalError::UnexpectedToken`] for any other identifier, for tokens that
///   cannot start a factor, at end of input, and (with the text
///   `')' expected`) when a group is not closed.
pub fn factor(lexer: &mut Lexer<'_>) -> EvalResult<f64> {
    match lexer.current() {
        Some(Token::LParen) => {
            lexer.descend()?;
            lexer.advance()?;
            let value = expression(lexer)?;
            if lexer.current() != Some(&Token::RParen) {
                return Err(EvalError::UnexpectedToken { token:  "')' expected".to_string(),
                                                        offset: lexer.offset(), });
            }
            lexer.advance()?;
            lexer.ascend();
            Ok(value)
        },
        Some(Token::Plus) => {
            lexer.descend()?;
            lexer.advance()?;
            let value = factor(lexer)?;
            lexer.ascend();
            Ok(value)
        },
        Some(Token::Minus) => {
            lexer.descend()?;
            lexer.advance()?;
            let value = factor(lexer)?;
            lexer.ascend();
            Ok(-value)
        },
        Some(Token::Number(n)) => {
            let n = *n;
            lexer.advance()?;
            Ok(n)
        },
        Some(Token::Identifier(name)) if name == QUIT => Err(EvalError::QuitRequested),
        _ => Err(lexer.unexpected()),
    }
}
