/// The evaluator computes values straight from the token stream.
///
/// There is no syntax tree: each grammar level (expression, term, factor)
/// pulls tokens from the lexer and returns the value it denotes.
///
/// # Responsibilities
/// - Applies standard precedence and left associativity.
/// - Handles unary signs and parenthesized groups.
/// - Reports misplaced tokens, leftover input and the `quit` request.
pub mod evaluator;
/// The lexer module tokenizes source text for the evaluator.
///
/// The lexer reads the raw text and produces numbers, identifiers, operators
/// and punctuation, exposing exactly one token of lookahead.
///
/// # Responsibilities
/// - Classifies input into tokens and skips whitespace.
/// - Tracks the position of the current token for error reporting.
/// - Reports characters that do not form any token.
pub mod lexer;
/// The session module drives an interactive, statement-per-line calculator.
///
/// Statements end with `;`. Each one is evaluated and its result or error is
/// written out, until the input ends or `quit` is entered.
pub mod session;
