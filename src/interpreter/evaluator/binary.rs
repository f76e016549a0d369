use crate::interpreter::{
    evaluator::{core::EvalResult, unary::factor},
    lexer::{Lexer, Token},
};

/// Evaluates addition and subtraction.
///
/// Handles the left-associative operators `+` and `-`, folding each new term
/// into the running value as soon as it is read.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `lexer`: Cursor positioned at the first token of the expression.
///
/// # Returns
/// The value of the expression. The lexer is left on the first token that is
/// neither `+` nor `-`.
///
/// # Example
/// ```
/// use calcium::interpreter::{evaluator::binary::expression, lexer::Lexer};
///
/// let mut lexer = Lexer::new("10 - 4 - 3");
/// lexer.advance().unwrap();
/// assert_eq!(expression(&mut lexer).unwrap(), 3.0);
/// ```
pub fn expression(lexer: &mut Lexer<'_>) -> EvalResult<f64> {
    let mut value = term(lexer)?;
    loop {
        match lexer.current() {
            Some(Token::Plus) => {
                lexer.advance()?;
                value += term(lexer)?;
            },
            Some(Token::Minus) => {
                lexer.advance()?;
                value -= term(lexer)?;
            },
            _ => return Ok(value),
        }
    }
}

/// Evaluates multiplication and division.
///
/// Handles the left-associative operators `*` and `/`. Division follows IEEE
/// 754: dividing by zero yields an infinity or NaN, not an error.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `lexer`: Cursor positioned at the first token of the term.
///
/// # Returns
/// The value of the term.
///
/// # Example
/// ```
/// use calcium::interpreter::{evaluator::binary::term, lexer::Lexer};
///
/// let mut lexer = Lexer::new("8 / 2 / 2");
/// lexer.advance().unwrap();
/// assert_eq!(term(&mut lexer).unwrap(), 2.0);
/// ```
pub fn term(lexer: &mut Lexer<'_>) -> EvalResult<f64> {
    let mut value = factor(lexer)?;
    loop {
        match lexer.current() {
            Some(Token::Star) => {
                lexer.advance()?;
                value *= factor(lexer)?;
            },
            Some(Token::Slash) => {
                lexer.advance()?;
                value /= factor(lexer)?;
            },
            _ => return Ok(value),
        }
    }
}
