use logos::Logos;

use crate::error::EvalError;

/// Text reported for the current token once the input is exhausted.
pub const END_OF_INPUT: &str = "end of input";

/// Deepest nesting of groups and unary signs an expression may use.
pub const MAX_DEPTH: usize = 256;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// End of input is not a variant: the [`Lexer`] reports it as the absence of
/// a current token.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// Integer and decimal forms produce the same `f64` scalar.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens such as `quit`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Semicolon => write!(f, ";"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which makes logos report a
///   lexical error for it.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// A cursor over the input with exactly one token of lookahead.
///
/// The lexer is created for a single evaluation and only moves forward.
/// [`Lexer::advance`] is the only way to change the current token.
///
/// # Example
/// ```
/// use calcium::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("12 * x");
/// lexer.advance().unwrap();
/// assert_eq!(lexer.current(), Some(&Token::Number(12.0)));
/// lexer.advance().unwrap();
/// assert_eq!(lexer.current(), Some(&Token::Star));
/// lexer.advance().unwrap();
/// assert_eq!(lexer.text(), "x");
/// lexer.advance().unwrap();
/// assert!(lexer.at_end());
/// ```
pub struct Lexer<'src> {
    inner:   logos::Lexer<'src, Token>,
    current: Option<Token>,
    text:    &'src str,
    offset:  usize,
    failed:  bool,
    depth:   usize,
}

impl<'src> Lexer<'src> {
    /// Binds a fresh lexer to `source`.
    ///
    /// No token is scanned yet; call [`Lexer::advance`] before reading the
    /// current token.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:   Token::lexer(source),
               current: None,
               text:    "",
               offset:  0,
               failed:  false,
               depth:   0, }
    }

    /// Scans the next token and makes it current.
    ///
    /// Whitespace between tokens is skipped. Once the input is exhausted the
    /// current token becomes `None` and stays there. After a lexical failure
    /// there is no current token either, but [`Lexer::failed`] is set and
    /// [`Lexer::at_end`] stays `false`.
    ///
    /// # Errors
    /// Returns [`EvalError::LexError`] if the next characters do not form any
    /// token.
    pub fn advance(&mut self) -> Result<(), EvalError> {
        match self.inner.next() {
            Some(Ok(token)) => {
                self.text = self.inner.slice();
                self.offset = self.inner.span().start;
                log::trace!("token {token:?} at {}", self.offset);
                self.current = Some(token);
                self.failed = false;
                Ok(())
            },
            Some(Err(())) => {
                let text = self.inner.slice();
                let offset = self.inner.span().start;
                self.text = text;
                self.offset = offset;
                self.current = None;
                self.failed = true;
                Err(EvalError::LexError { text: text.to_string(),
                                          offset })
            },
            None => {
                self.text = "";
                self.offset = self.inner.source().len();
                log::trace!("end of input at {}", self.offset);
                self.current = None;
                self.failed = false;
                Ok(())
            },
        }
    }

    /// The current lookahead token, or `None` at end of input.
    #[must_use]
    pub const fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Raw source text of the current token; empty at end of input.
    #[must_use]
    pub const fn text(&self) -> &'src str {
        self.text
    }

    /// Byte offset of the current token.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.current.is_none() && !self.failed
    }

    /// Returns `true` if the last [`Lexer::advance`] hit text that forms no
    /// token. [`Lexer::text`] then holds that text.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.failed
    }

    /// Enters one level of nesting before a group or unary sign is evaluated.
    ///
    /// # Errors
    /// Returns [`EvalError::NestingTooDeep`] past [`MAX_DEPTH`] levels.
    pub fn descend(&mut self) -> Result<(), EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::NestingTooDeep { offset: self.offset });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves the level entered by the matching [`Lexer::descend`].
    pub const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current nesting depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Builds an [`EvalError::UnexpectedToken`] for the current token.
    pub(crate) fn unexpected(&self) -> EvalError {
        EvalError::UnexpectedToken { token:  self.describe(),
                                     offset: self.offset, }
    }

    /// The current token's text, with end of input spelled out.
    pub(crate) fn describe(&self) -> String {
        if self.at_end() {
            END_OF_INPUT.to_string()
        } else {
            self.text.to_string()
        }
    }
}
