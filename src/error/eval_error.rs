use crate::interpreter::lexer::MAX_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing or evaluating an
/// expression.
///
/// Offsets are byte positions into the evaluated text and point at the start
/// of the offending token.
pub enum EvalError {
    /// Found a token that is not valid at this point of the grammar.
    ///
    /// Covers stray operators, unknown identifiers, an unmatched `(` (with the
    /// token text `')' expected`) and input that ends inside an expression
    /// (with the token text `end of input`).
    UnexpectedToken {
        /// The token encountered, or a description of what was expected.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// A complete expression was parsed but more input follows it.
    TrailingInput {
        /// The first token after the expression.
        token:  String,
        /// Byte offset of that token.
        offset: usize,
    },
    /// A character that does not start any known token.
    LexError {
        /// The text that failed to scan.
        text:   String,
        /// Byte offset of the text.
        offset: usize,
    },
    /// Parentheses and unary signs nest deeper than
    /// [`MAX_DEPTH`](crate::interpreter::lexer::MAX_DEPTH).
    NestingTooDeep {
        /// Byte offset of the token that would open one level too many.
        offset: usize,
    },
    /// The identifier `quit` appeared where a value was expected.
    ///
    /// This is a control signal rather than a failure: drivers end the
    /// session instead of reporting it.
    QuitRequested,
}

impl EvalError {
    /// Returns `true` if this is the session termination signal.
    ///
    /// # Example
    /// ```
    /// use calcium::evaluate;
    ///
    /// assert!(evaluate("quit").unwrap_err().is_quit());
    /// assert!(!evaluate("1 +").unwrap_err().is_quit());
    /// ```
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::QuitRequested)
    }

    /// Byte offset the error refers to, if it refers to one.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { offset, .. }
            | Self::TrailingInput { offset, .. }
            | Self::LexError { offset, .. }
            | Self::NestingTooDeep { offset } => Some(*offset),
            Self::QuitRequested => None,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Error at offset {offset}: Unexpected token: {token}.")
            },
            Self::TrailingInput { token, offset } => write!(f,
                                                            "Error at offset {offset}: Invalid expression, unexpected {token} after the end."),
            Self::LexError { text, offset } => {
                write!(f, "Error at offset {offset}: Unrecognized input: {text}.")
            },
            Self::NestingTooDeep { offset } => write!(f,
                                                      "Error at offset {offset}: Expression nests deeper than {MAX_DEPTH} levels."),
            Self::QuitRequested => write!(f, "Quit requested."),
        }
    }
}

impl std::error::Error for EvalError {}
